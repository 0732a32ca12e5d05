//! Tests de propriétés : campagne déterministe sur le pipeline complet.
//!
//! - RNG déterministe (seed fixe), nombre de cas borné
//! - opérandes entiers ou décimaux courts (pas de zéro pour `/` sauf test dédié)

use super::arrondi::{arrondir, DECIMALES_ARRONDI};
use super::operateurs::ORDRE_REDUCTION;
use super::{appliquer_unaire, evaluer, format_resultat, ErreurSyntaxe, Op, Unaire};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Génération ------------------------ */

/// Littéral positif : "17" ou "3.25" (jamais 0).
fn gen_litteral(rng: &mut Rng) -> String {
    let entier = 1 + rng.pick(999);
    if rng.coin() {
        format!("{entier}.{:02}", rng.pick(100))
    } else {
        format!("{entier}")
    }
}

fn gen_op(rng: &mut Rng) -> Op {
    ORDRE_REDUCTION[rng.pick(4) as usize]
}

/// Suite de signes de longueur 1..=4.
fn gen_signes(rng: &mut Rng) -> String {
    let n = 1 + rng.pick(4);
    (0..n).map(|_| if rng.coin() { '-' } else { '+' }).collect()
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn prop_operateur_unique() {
    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..300 {
        let a = gen_litteral(&mut rng);
        let b = gen_litteral(&mut rng);
        let op = gen_op(&mut rng);
        let expr = format!("{a}{}{b}", op.symbole());

        let fa: f64 = a.parse().unwrap();
        let fb: f64 = b.parse().unwrap();
        let attendu = arrondir(op.appliquer(fa, fb), DECIMALES_ARRONDI);

        assert_eq!(evaluer(&expr), Ok(attendu), "expr={expr:?}");
    }
}

#[test]
fn prop_egal_idempotent() {
    let mut rng = Rng::new(0xBADC0DE_u64);

    let mut vus = 0usize;
    for _ in 0..200 {
        // 2 à 5 opérandes, signes aléatoires après chaque opérateur
        let n = 2 + rng.pick(4);
        let mut expr = gen_litteral(&mut rng);
        for _ in 1..n {
            expr.push(gen_op(&mut rng).symbole());
            if rng.coin() {
                expr.push_str(&gen_signes(&mut rng));
            }
            expr.push_str(&gen_litteral(&mut rng));
        }

        // opérandes ≤ 1000, pas de zéro : toujours valide et fini
        let r = evaluer(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        let texte = format_resultat(r);
        assert_eq!(evaluer(&texte), Ok(r), "expr={expr:?} texte={texte:?}");
        vus += 1;
    }

    assert!(vus > 100, "trop peu de cas: {vus}");
}

#[test]
fn prop_parite_des_signes() {
    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        let signes = gen_signes(&mut rng);
        let moins = signes.chars().filter(|c| *c == '-').count();
        let expr = format!("10{signes}4");
        let attendu = if moins % 2 == 0 { 14.0 } else { 6.0 };
        assert_eq!(evaluer(&expr), Ok(attendu), "expr={expr:?}");
    }
}

#[test]
fn prop_signe_apres_multiplicatif() {
    let mut rng = Rng::new(0xFACADE_u64);

    for _ in 0..200 {
        let signes = gen_signes(&mut rng);
        let moins = signes.chars().filter(|c| *c == '-').count();
        let s = if moins % 2 == 0 { 1.0 } else { -1.0 };

        assert_eq!(evaluer(&format!("6*{signes}3")), Ok(18.0 * s));
        assert_eq!(evaluer(&format!("6/{signes}3")), Ok(2.0 * s));
    }
}

#[test]
fn prop_operateur_final_incomplet() {
    let mut rng = Rng::new(0xD00D_u64);

    for _ in 0..100 {
        let a = gen_litteral(&mut rng);
        let op = gen_op(&mut rng);
        let expr = format!("{a}{}", op.symbole());
        assert_eq!(
            evaluer(&expr),
            Err(ErreurSyntaxe::OperandeManquant),
            "expr={expr:?}"
        );
    }
}

#[test]
fn prop_division_par_zero() {
    let mut rng = Rng::new(0xABCD_u64);

    for _ in 0..100 {
        let a = gen_litteral(&mut rng);
        let expr = format!("{a}/0");
        assert_eq!(evaluer(&expr), Err(ErreurSyntaxe::ResultatNonFini));
    }
}

#[test]
fn prop_unaires() {
    assert_eq!(appliquer_unaire(Unaire::Racine, 9.0), Ok(3.0));
    assert!(appliquer_unaire(Unaire::Racine, -1.0).is_err());
    assert!(appliquer_unaire(Unaire::Inverse, 0.0).is_err());

    let mut rng = Rng::new(0x1234_u64);
    for _ in 0..100 {
        let x = f64::from(1 + rng.pick(10_000)) / 100.0;
        let c = appliquer_unaire(Unaire::Carre, x).unwrap();
        let r = appliquer_unaire(Unaire::Racine, c).unwrap();
        assert!((r - x).abs() < 1e-9, "x={x} r={r}");

        // résultat unaire => “=” relit exactement la même valeur
        for v in [c, r, appliquer_unaire(Unaire::Inverse, x).unwrap()] {
            assert_eq!(evaluer(&format_resultat(v)), Ok(v), "x={x} v={v}");
        }
    }
}
