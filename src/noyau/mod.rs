//! Noyau de la calculatrice séquentielle
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (opérateurs, littéral)
//! - signes.rs     : repli des signes + suite normalisée
//! - operateurs.rs : / * - + et leur ordre de réduction
//! - reduction.rs  : réduction par classes
//! - arrondi.rs    : arrondi exact à 14 décimales
//! - unaire.rs     : x², 1/x, √x
//! - format.rs     : texte du résultat
//! - eval.rs       : pipeline complet

pub mod arrondi;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod reduction;
pub mod signes;
pub mod unaire;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::ErreurSyntaxe;
pub use eval::{demarche, evaluer, Demarche};
pub use format::format_resultat;
pub use operateurs::Op;
pub use unaire::{appliquer_unaire, Unaire};
