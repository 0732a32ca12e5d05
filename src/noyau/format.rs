//! Affichage du résultat (sortie + touche “=”).
//!
//! `{}` sur f64 donne la plus courte écriture décimale qui relit la même valeur,
//! sans notation exponentielle : le texte repasse donc tel quel dans `tokenize`.

/// Texte d’un résultat fini. `-0` s’écrit `0`.
pub fn format_resultat(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    format!("{x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entiers_sans_virgule() {
        assert_eq!(format_resultat(14.0), "14");
        assert_eq!(format_resultat(-3.0), "-3");
        assert_eq!(format_resultat(-0.0), "0");
    }

    #[test]
    fn decimaux() {
        assert_eq!(format_resultat(0.3), "0.3");
        assert_eq!(format_resultat(0.33333333333333), "0.33333333333333");
    }

    #[test]
    fn jamais_d_exposant() {
        let grand = format_resultat(1e21);
        assert!(!grand.contains('e'), "{grand}");
        assert_eq!(grand, "1000000000000000000000");

        let petit = format_resultat(1e-7);
        assert!(!petit.contains('e'), "{petit}");
        assert_eq!(petit, "0.0000001");
    }
}
