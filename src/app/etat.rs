// src/app/etat.rs
//
// État de la calculatrice (sans vue).
//
// Rôle : contenir l’expression tapée (une entrée par touche), le résultat
// courant et le drapeau d’erreur, et appliquer une touche.
//
// Contrats :
// - Valeur en entrée, valeur en sortie : `EtatCalc::appuyer(self, touche) -> EtatCalc`.
// - Le noyau est appelé avec la chaîne complète ; il ne garde rien.
// - Une erreur bloque “=” jusqu’à DEL ou C.

use tracing::debug;

use crate::noyau::{
    appliquer_unaire, demarche, evaluer, format_resultat, Demarche, ErreurSyntaxe, Op, Unaire,
};

/// Libellé unique, quelle que soit la cause.
pub const LIBELLE_ERREUR: &str = "Syntax Error";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Op(Op),
    Effacer,
    Vider,
    Unaire(Unaire),
    Egal,
}

impl Touche {
    /// Clavier physique : chiffres, `.`, `+ - * /`, `=`.
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Point),
            '=' => Some(Touche::Egal),
            // clavier FR : × et ÷ si disposition étendue
            '×' => Some(Touche::Op(Op::Mul)),
            '÷' => Some(Touche::Op(Op::Div)),
            _ => Op::depuis_symbole(c).map(Touche::Op),
        }
    }

    /// Fragment ajouté aux piles : (expression, affichage). `None` pour les fonctions.
    fn fragment(self) -> Option<(String, String)> {
        match self {
            Touche::Chiffre(c) => Some((c.to_string(), c.to_string())),
            Touche::Point => Some((".".into(), ".".into())),
            Touche::Op(op) => Some((op.symbole().to_string(), op.glyphe().to_string())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalc {
    // une entrée par touche (DEL retire exactement une entrée)
    pile_expr: Vec<String>,
    pile_affichage: Vec<String>,

    pub resultat: f64,
    pub erreur: Option<ErreurSyntaxe>,
    pub demarche: Demarche,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            pile_expr: Vec::new(),
            pile_affichage: Vec::new(),
            resultat: 0.0,
            erreur: None,
            demarche: Demarche::default(),
        }
    }
}

impl EtatCalc {
    /// Chaîne envoyée au noyau.
    pub fn expression(&self) -> String {
        self.pile_expr.concat()
    }

    /// Chaîne affichée (× ÷ −).
    pub fn affichage(&self) -> String {
        self.pile_affichage.concat()
    }

    /// Sortie : résultat courant ou libellé d’erreur.
    pub fn sortie(&self) -> String {
        if self.erreur.is_some() {
            LIBELLE_ERREUR.to_string()
        } else {
            format_resultat(self.resultat)
        }
    }

    /// Applique une touche et rend le nouvel état.
    pub fn appuyer(mut self, touche: Touche) -> Self {
        debug!(?touche, expression = %self.expression(), "touche");

        if let Some((expr, aff)) = touche.fragment() {
            self.pile_expr.push(expr);
            self.pile_affichage.push(aff);
            return self.reevaluer();
        }

        match touche {
            Touche::Effacer => {
                self.pile_expr.pop();
                self.pile_affichage.pop();
                if self.pile_expr.is_empty() {
                    // rien à évaluer : on repart de zéro
                    return Self::default();
                }
                self.reevaluer()
            }
            Touche::Vider => Self::default(),
            Touche::Unaire(kind) => {
                match appliquer_unaire(kind, self.resultat) {
                    Ok(v) => {
                        self.resultat = v;
                        self.erreur = None;
                    }
                    Err(e) => self.erreur = Some(e),
                }
                self
            }
            Touche::Egal => {
                if self.erreur.is_none() {
                    let texte = format_resultat(self.resultat);
                    self.pile_expr = vec![texte.clone()];
                    self.pile_affichage = vec![texte];
                }
                self
            }
            Touche::Chiffre(_) | Touche::Point | Touche::Op(_) => self,
        }
    }

    /// Évalue l’expression courante : succès => nouveau résultat ; échec => drapeau.
    /// Le dernier bon résultat est conservé en cas d’erreur.
    fn reevaluer(mut self) -> Self {
        let expr = self.expression();
        match evaluer(&expr) {
            Ok(v) => {
                self.resultat = v;
                self.erreur = None;
            }
            Err(e) => self.erreur = Some(e),
        }
        self.demarche = demarche(&expr);
        self
    }
}

/// État UI : l’état de calcul + détails d’interface.
#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub etat: EtatCalc,
}

impl AppCalc {
    /// Remplace l’état par celui produit par la touche.
    pub fn appuyer(&mut self, touche: Touche) {
        self.etat = std::mem::take(&mut self.etat).appuyer(touche);
    }
}
