//! Arrondi décimal EXACT d’un f64 (n décimales), puis relecture en f64.
//!
//! Le f64 est converti en rationnel exact (valeur binaire réelle), multiplié
//! par 10^n, arrondi à l’entier le plus proche (demi => loin de zéro), puis
//! réécrit en décimal. Même résultat qu’un formatage “n décimales fixes”.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Précision d’affichage du résultat final (absorbe 0.1+0.2 = 0.30000000000000004).
pub const DECIMALES_ARRONDI: usize = 14;

/// Au-delà de 2^53, tout f64 est un entier : rien à arrondir.
const ENTIER_EXACT: f64 = 9_007_199_254_740_992.0;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal.
fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Arrondit `x` à `decimales` chiffres après la virgule.
///
/// - non fini : renvoyé tel quel (le réducteur l’a déjà refusé)
/// - |x| ≥ 2^53 : déjà entier
/// - un résultat nul est toujours `0.0` (jamais `-0.0`)
pub fn arrondir(x: f64, decimales: usize) -> f64 {
    if !x.is_finite() || x.abs() >= ENTIER_EXACT {
        return x;
    }

    let r = match BigRational::from_float(x) {
        Some(r) => r,
        None => return x,
    };

    let scaled = (r * BigRational::from_integer(pow10(decimales)))
        .round()
        .to_integer();

    let txt = scaled_to_decimal(scaled, decimales);
    match txt.parse::<f64>() {
        Ok(v) if v == 0.0 => 0.0,
        Ok(v) => v,
        Err(_) => x,
    }
}
