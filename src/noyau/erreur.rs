//! Erreur unique du noyau.
//!
//! Toutes les causes sont affichées pareil côté UI (« Syntax Error »).
//! Les variantes servent aux logs et aux tests, pas à l’utilisateur.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    /// Dernier opérande absent : "5+", "", "."
    #[error("opérande manquant")]
    OperandeManquant,

    /// Suite d’opérateurs invalide : "5*/3", "5**3", "*5"
    #[error("suite d’opérateurs invalide: {run:?}")]
    SequenceMalformee { run: String },

    /// Division par zéro, dépassement, racine d’un négatif…
    #[error("résultat non fini")]
    ResultatNonFini,
}

impl ErreurSyntaxe {
    pub(crate) fn malformee(run: &str) -> Self {
        Self::SequenceMalformee {
            run: run.to_string(),
        }
    }
}
