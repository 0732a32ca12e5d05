//! Tokenisation : suites d’opérateurs et littéraux, en paires.

/// Un terme = une suite d’opérateurs suivie d’un littéral numérique.
///
/// Exemple : "3+-5*2" => (+,3) (+-,5) (*,2)
///
/// Le littéral peut être vide : dernière touche = opérateur ("5+"),
/// ou entrée vide. Le normaliseur le refusera.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Terme {
    pub operateurs: String,
    pub litteral: String,
}

fn est_litteral(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenize une entrée de calculatrice.
///
/// - On préfixe un `+` implicite : chaque nombre a donc un signe devant.
/// - Suite maximale de caractères hors [0-9.] => opérateurs
/// - Suite maximale de [0-9.] => littéral
///
/// Pas d’erreur ici : les caractères inconnus tombent dans une suite
/// d’opérateurs, et c’est le normaliseur qui tranche.
pub fn tokenize(s: &str) -> Vec<Terme> {
    let entree = format!("+{s}");
    let chars: Vec<char> = entree.chars().collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        // opérateurs (toujours au moins le `+` implicite au départ)
        let start = i;
        while i < chars.len() && !est_litteral(chars[i]) {
            i += 1;
        }
        let operateurs: String = chars[start..i].iter().collect();

        // littéral (éventuellement vide en fin d’entrée)
        let start = i;
        while i < chars.len() && est_litteral(chars[i]) {
            i += 1;
        }
        let litteral: String = chars[start..i].iter().collect();

        out.push(Terme {
            operateurs,
            litteral,
        });
    }

    out
}

/// Format utilitaire (“démarche”) : "+ 3 +- 5 * 2"
pub fn format_termes(termes: &[Terme]) -> String {
    let mut out = Vec::with_capacity(termes.len() * 2);
    for t in termes {
        out.push(t.operateurs.as_str());
        if !t.litteral.is_empty() {
            out.push(t.litteral.as_str());
        }
    }
    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plat(s: &str) -> Vec<String> {
        tokenize(s)
            .into_iter()
            .flat_map(|t| [t.operateurs, t.litteral])
            .collect()
    }

    #[test]
    fn exemple_alternance() {
        assert_eq!(plat("3+-5*2"), ["+", "3", "+-", "5", "*", "2"]);
    }

    #[test]
    fn vide_donne_signe_seul() {
        let t = tokenize("");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].operateurs, "+");
        assert!(t[0].litteral.is_empty());
    }

    #[test]
    fn operateur_final_donne_litteral_vide() {
        assert_eq!(plat("5+"), ["+", "5", "+", ""]);
        assert_eq!(plat("5*-"), ["+", "5", "*-", ""]);
    }

    #[test]
    fn signe_initial_fusionne_avec_le_plus_implicite() {
        assert_eq!(plat("-7"), ["+-", "7"]);
        assert_eq!(plat("*7"), ["+*", "7"]);
    }

    #[test]
    fn points_restent_dans_le_litteral() {
        assert_eq!(plat("1.5/.25"), ["+", "1.5", "/", ".25"]);
        assert_eq!(plat("1.2.3"), ["+", "1.2.3"]);
    }

    #[test]
    fn autant_d_operateurs_que_de_litteraux() {
        for s in ["", "1", "1+2", "1+2*", "--3", "4/-2+"] {
            let t = tokenize(s);
            assert!(t.iter().all(|x| !x.operateurs.is_empty()), "s={s:?}");
        }
    }

    #[test]
    fn format_demarche() {
        assert_eq!(format_termes(&tokenize("3+-5*2")), "+ 3 +- 5 * 2");
        assert_eq!(format_termes(&tokenize("5+")), "+ 5 +");
    }
}
