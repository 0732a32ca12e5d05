//! Normalisation des signes.
//!
//! Entrée : termes du tokenizer `(opérateurs, littéral)`.
//! Sortie : suite propre `nombre (op nombre)*`, prête pour le réducteur.
//!
//! Règles :
//! - suite de `+`/`-` seulement => un seul signe (parité des `-`)
//! - le tout premier signe est replié dans le premier nombre
//! - `*` ou `/` suivi de signes ("*-", "/+-") : le signe net passe au nombre suivant
//! - `*`/`/` ailleurs qu’en tête, en double, ou mélangés => erreur

use std::fmt;

use super::erreur::ErreurSyntaxe;
use super::jetons::Terme;
use super::operateurs::Op;

/// Suite normalisée. La forme `premier + suite` garantit la longueur impaire.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceNormalisee {
    pub premier: f64,
    pub suite: Vec<(Op, f64)>,
}

impl SequenceNormalisee {
    /// Nombre d’éléments de la liste plate (toujours impair).
    pub fn longueur(&self) -> usize {
        1 + 2 * self.suite.len()
    }
}

impl fmt::Display for SequenceNormalisee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.premier)?;
        for (op, x) in &self.suite {
            write!(f, " {} {}", op.symbole(), x)?;
        }
        Ok(())
    }
}

/// Signe net d’une suite de `+`/`-` : `Some(1.0)` ou `Some(-1.0)`.
/// `None` si un autre caractère traîne dans la suite.
fn signe_net(run: &str) -> Option<f64> {
    let mut moins = 0usize;
    for c in run.chars() {
        match c {
            '+' => {}
            '-' => moins += 1,
            _ => return None,
        }
    }
    Some(if moins % 2 == 0 { 1.0 } else { -1.0 })
}

/// Lecture “tolérante” d’un littéral : plus long préfixe `chiffres[.chiffres]`.
/// "1.2.3" => 1.2, "7." => 7, ".5" => 0.5. Sans aucun chiffre => opérande manquant.
fn lire_litteral(lit: &str) -> Result<f64, ErreurSyntaxe> {
    let b = lit.as_bytes();
    let mut i = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut chiffres = i;
    if i < b.len() && b[i] == b'.' {
        i += 1;
        let debut_frac = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        chiffres += i - debut_frac;
    }

    if chiffres == 0 {
        return Err(ErreurSyntaxe::OperandeManquant);
    }

    lit[..i]
        .parse::<f64>()
        .map_err(|_| ErreurSyntaxe::OperandeManquant)
}

/// Opérateur effectif d’une suite (hors première) + facteur de signe pour le nombre suivant.
fn lire_operateurs(run: &str) -> Result<(Op, f64), ErreurSyntaxe> {
    // Suite de signes purs : "+", "-", "+-", "--"…
    if let Some(s) = signe_net(run) {
        let op = if s > 0.0 { Op::Add } else { Op::Sub };
        return Ok((op, 1.0));
    }

    // `*` ou `/` en tête, puis uniquement des signes
    let mut chars = run.chars();
    let tete = chars
        .next()
        .and_then(Op::depuis_symbole)
        .filter(|op| op.est_multiplicatif())
        .ok_or_else(|| ErreurSyntaxe::malformee(run))?;

    let reste = chars.as_str();
    let signe = signe_net(reste).ok_or_else(|| ErreurSyntaxe::malformee(run))?;

    Ok((tete, signe))
}

/// Normalise les termes en suite alternée `nombre, op, nombre, …`.
pub fn normaliser(termes: &[Terme]) -> Result<SequenceNormalisee, ErreurSyntaxe> {
    // Dernier opérande absent => incomplet (vérifié en premier).
    let dernier = termes.last().ok_or(ErreurSyntaxe::OperandeManquant)?;
    lire_litteral(&dernier.litteral)?;

    let (tete, reste) = termes
        .split_first()
        .ok_or(ErreurSyntaxe::OperandeManquant)?;

    // Premier signe replié dans le premier nombre ; "*5" n’a pas de sens.
    let s0 = signe_net(&tete.operateurs)
        .ok_or_else(|| ErreurSyntaxe::malformee(&tete.operateurs))?;
    let premier = s0 * lire_litteral(&tete.litteral)?;

    let mut suite = Vec::with_capacity(reste.len());
    for t in reste {
        let (op, signe) = lire_operateurs(&t.operateurs)?;
        let x = signe * lire_litteral(&t.litteral)?;
        suite.push((op, x));
    }

    Ok(SequenceNormalisee { premier, suite })
}
