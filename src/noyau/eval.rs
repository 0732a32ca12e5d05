//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> normaliser (signes) -> reduire (/ * - +) -> arrondi 14 décimales
//!
//! Appelé après CHAQUE touche : tout est recalculé depuis la chaîne,
//! rien n’est gardé d’un appel à l’autre.

use tracing::debug;

use super::erreur::ErreurSyntaxe;
use super::jetons::{format_termes, tokenize};
use super::reduction::reduire;
use super::signes::normaliser;

/// Trace lisible des étapes (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub sequence: String,
}

/// API publique : évalue une expression de calculatrice.
pub fn evaluer(expr: &str) -> Result<f64, ErreurSyntaxe> {
    // 1) Jetons
    let termes = tokenize(expr);

    // 2) Signes
    let seq = normaliser(&termes).inspect_err(|e| {
        debug!(expr, jetons = %format_termes(&termes), erreur = %e, "normalisation refusée");
    })?;
    let longueur = seq.longueur();

    // 3) Réduction
    let v = reduire(seq).inspect_err(|e| {
        debug!(expr, longueur, erreur = %e, "réduction refusée");
    })?;

    debug!(expr, longueur, resultat = v, "évaluation");
    Ok(v)
}

/// Démarche d’une expression : jetons + suite normalisée (ou vide si refusée).
/// Sans réduction : sert seulement à l’affichage.
pub fn demarche(expr: &str) -> Demarche {
    let termes = tokenize(expr);
    let sequence = normaliser(&termes)
        .map(|s| s.to_string())
        .unwrap_or_default();

    Demarche {
        jetons: format_termes(&termes),
        sequence,
    }
}
