//! Réduction par classes d’opérateurs.
//!
//! Passe complète par classe, dans `ORDRE_REDUCTION` (/ * - +) :
//! on cherche la première occurrence, on remplace le triplet
//! `(gauche, op, droite)` par sa valeur, on recommence.
//!
//! Travail sur une liste de travail possédée : chaque étape produit
//! une suite raccourcie, sans alias.

use tracing::trace;

use super::arrondi::{arrondir, DECIMALES_ARRONDI};
use super::erreur::ErreurSyntaxe;
use super::operateurs::{Op, ORDRE_REDUCTION};
use super::signes::SequenceNormalisee;

/// Construit la suite suivante : première occurrence de `op` remplacée
/// par le résultat du triplet. `Ok(None)` si `op` n’apparaît plus.
fn etape(seq: &SequenceNormalisee, op: Op) -> Result<Option<SequenceNormalisee>, ErreurSyntaxe> {
    let idx = match seq.suite.iter().position(|(o, _)| *o == op) {
        Some(i) => i,
        None => return Ok(None),
    };

    // opérande gauche : le nombre juste avant l’opérateur
    let gauche = if idx == 0 {
        seq.premier
    } else {
        seq.suite[idx - 1].1
    };
    let droite = seq.suite[idx].1;
    let v = op.appliquer(gauche, droite);

    trace!(%gauche, op = %op.symbole(), %droite, resultat = %v, "réduction");

    if !v.is_finite() {
        return Err(ErreurSyntaxe::ResultatNonFini);
    }

    let mut premier = seq.premier;
    let mut suite: Vec<(Op, f64)> = Vec::with_capacity(seq.suite.len() - 1);
    for (i, &(o, x)) in seq.suite.iter().enumerate() {
        if i == idx {
            continue;
        }
        suite.push((o, x));
    }

    // le résultat prend la place de l’opérande gauche
    if idx == 0 {
        premier = v;
    } else {
        suite[idx - 1].1 = v;
    }

    Ok(Some(SequenceNormalisee { premier, suite }))
}

/// Réduit une suite normalisée jusqu’à un seul nombre, arrondi à 14 décimales.
pub fn reduire(seq: SequenceNormalisee) -> Result<f64, ErreurSyntaxe> {
    let mut courante = seq;

    for op in ORDRE_REDUCTION {
        while let Some(suivante) = etape(&courante, op)? {
            courante = suivante;
        }
    }

    // Toutes les classes sont passées : plus aucun opérateur.
    debug_assert!(courante.suite.is_empty());

    if !courante.premier.is_finite() {
        return Err(ErreurSyntaxe::ResultatNonFini);
    }

    Ok(arrondir(courante.premier, DECIMALES_ARRONDI))
}
