//! Opérations unaires sur le résultat courant (x², 1/x, √x).
//!
//! Pas de re-parsing : transformation numérique directe, puis même arrondi
//! que le réducteur (le résultat peut repasser par “=”).

use super::arrondi::{arrondir, DECIMALES_ARRONDI};
use super::erreur::ErreurSyntaxe;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Carre,
    Inverse,
    Racine,
}

impl Unaire {
    /// Libellé de touche.
    pub fn libelle(self) -> &'static str {
        match self {
            Unaire::Carre => "x²",
            Unaire::Inverse => "1/x",
            Unaire::Racine => "√",
        }
    }
}

/// Applique l’opération, arrondie à 14 décimales.
/// NaN ou infini => erreur (1/0, √-1, dépassement).
pub fn appliquer_unaire(kind: Unaire, x: f64) -> Result<f64, ErreurSyntaxe> {
    let v = match kind {
        Unaire::Carre => x.powi(2),
        Unaire::Inverse => 1.0 / x,
        Unaire::Racine => x.sqrt(),
    };

    if v.is_finite() {
        Ok(arrondir(v, DECIMALES_ARRONDI))
    } else {
        Err(ErreurSyntaxe::ResultatNonFini)
    }
}
