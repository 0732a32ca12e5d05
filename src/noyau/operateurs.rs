//! Opérateurs binaires + ordre de réduction.
//!
//! L’ordre est FIXE : / puis * puis - puis + (passe complète par classe).
//! "2-3+4" : la passe `-` donne -1, puis la passe `+` donne 3.
//! "8*4/2" : 4/2 est calculé avant toute multiplication.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Div,
    Mul,
    Sub,
    Add,
}

/// Ordre des passes du réducteur. Tableau, jamais une map.
pub const ORDRE_REDUCTION: [Op; 4] = [Op::Div, Op::Mul, Op::Sub, Op::Add];

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Div => '/',
            Op::Mul => '*',
            Op::Sub => '-',
            Op::Add => '+',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Op> {
        match c {
            '/' => Some(Op::Div),
            '*' => Some(Op::Mul),
            '-' => Some(Op::Sub),
            '+' => Some(Op::Add),
            _ => None,
        }
    }

    /// Glyphe d’affichage (touche du pavé).
    pub fn glyphe(self) -> &'static str {
        match self {
            Op::Div => "÷",
            Op::Mul => "×",
            Op::Sub => "−",
            Op::Add => "+",
        }
    }

    /// Calcul flottant brut (pas de contrôle ici : le réducteur vérifie la finitude).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Op::Div => a / b,
            Op::Mul => a * b,
            Op::Sub => a - b,
            Op::Add => a + b,
        }
    }

    /// `*` ou `/`
    pub fn est_multiplicatif(self) -> bool {
        matches!(self, Op::Div | Op::Mul)
    }
}
