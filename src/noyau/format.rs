// src/noyau/format.rs
//
// Affichage final d’un f64 fini :
// - notation scientifique si |x| >= 1e10 ou 0 < |x| < 1e-6 (mantisse à 6 décimales)
// - sinon décimal “plat” à 15 chiffres significatifs (arrondi demi-haut),
//   zéros de queue retirés, entier sans point.
//
// L’arrondi travaille sur la valeur binaire EXACTE du f64 (rationnel),
// pas sur son écriture décimale la plus courte.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Chiffres significatifs du décimal plat.
pub const CHIFFRES_SIGNIFICATIFS: i32 = 15;

/// |x| >= seuil => notation scientifique.
pub const SEUIL_SCIENTIFIQUE_HAUT: f64 = 1e10;

/// 0 < |x| < seuil => notation scientifique.
pub const SEUIL_SCIENTIFIQUE_BAS: f64 = 1e-6;

/// Décimales de la mantisse en notation scientifique.
pub const DECIMALES_SCIENTIFIQUES: usize = 6;

/// Formate un résultat fini pour l’affichage.
///
/// NaN et ±∞ sont refusés en amont (`eval_rpn`) ; s’ils arrivent quand même,
/// on rend l’écriture Rust standard plutôt que de paniquer.
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }

    let abs = x.abs();
    if abs >= SEUIL_SCIENTIFIQUE_HAUT || (abs > 0.0 && abs < SEUIL_SCIENTIFIQUE_BAS) {
        format_scientifique(x)
    } else {
        format_decimal(x)
    }
}

/* ------------------------ Scientifique ------------------------ */

/// "1.234500E+10", "-1.000000E-07" : mantisse arrondie demi-haut,
/// exposant signé, au moins 2 chiffres.
///
/// L’arrondi part de l’écriture décimale la plus courte du f64 (celle que relit `parse`).
fn format_scientifique(x: f64) -> String {
    let abs = x.abs();
    let r = match decimal_court(abs) {
        Some(r) => r,
        None => return format!("{:.*E}", DECIMALES_SCIENTIFIQUES, x),
    };

    let decimales = DECIMALES_SCIENTIFIQUES as u32;
    let mut e = exposant_decimal(&r, abs);
    let mut mantisse = arrondi_scale(&r, decimales as i32 - e);

    // retenue : 9.9999995 => 10.000000 => 1.000000 et exposant + 1
    if mantisse >= pow10(decimales + 1) {
        mantisse = pow10(decimales);
        e += 1;
    }

    let txt = mantisse.to_str_radix(10);
    let (ent, frac) = txt.split_at(1);
    let signe_m = if x < 0.0 { "-" } else { "" };
    let signe_e = if e < 0 { '-' } else { '+' };
    format!("{signe_m}{ent}.{frac}E{signe_e}{:02}", e.unsigned_abs())
}

/// Écriture décimale la plus courte de `abs` ("1.2345625e10"), relue en rationnel exact.
fn decimal_court(abs: f64) -> Option<BigRational> {
    let txt = format!("{abs:e}");
    let (mantisse, exp) = txt.split_once('e')?;
    let exp: i32 = exp.parse().ok()?;
    let (ent, frac) = mantisse.split_once('.').unwrap_or((mantisse, ""));

    let n = BigInt::parse_bytes(format!("{ent}{frac}").as_bytes(), 10)?;
    Some(BigRational::from_integer(n) * puissance_dix(exp - frac.len() as i32))
}

/* ------------------------ Décimal plat ------------------------ */

fn pow10(n: u32) -> BigInt {
    BigInt::from(10).pow(n)
}

/// 10^e en rationnel (e signé).
fn puissance_dix(e: i32) -> BigRational {
    let p = BigRational::from_integer(pow10(e.unsigned_abs()));
    if e >= 0 {
        p
    } else {
        p.recip()
    }
}

/// Exposant décimal e tel que 10^e <= r < 10^(e+1) (r > 0).
/// Estimation par log10 puis correction exacte.
fn exposant_decimal(r: &BigRational, approx: f64) -> i32 {
    let mut e = approx.log10().floor() as i32;

    while *r >= puissance_dix(e + 1) {
        e += 1;
    }
    while *r < puissance_dix(e) {
        e -= 1;
    }
    e
}

/// round_half_up(r * 10^decimales) pour r >= 0.
fn arrondi_scale(r: &BigRational, decimales: i32) -> BigInt {
    let scaled = r * puissance_dix(decimales);
    let deux = BigInt::from(2);

    // floor((2n + d) / 2d) = arrondi demi-haut pour n/d >= 0
    let n = scaled.numer();
    let d = scaled.denom();
    (n * &deux + d) / (d * &deux)
}

/// Convertit un entier “scalé” (×10^decimales) en texte décimal,
/// sans zéros de queue ni point final.
fn scaled_to_decimal(scaled: &BigInt, decimales: i32) -> String {
    if decimales <= 0 {
        return (scaled * pow10(decimales.unsigned_abs())).to_string();
    }

    let digits = decimales as usize;
    let mut txt = scaled.to_str_radix(10);
    while txt.len() <= digits {
        txt.insert(0, '0');
    }

    let (ent, frac) = txt.split_at(txt.len() - digits);
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        ent.to_string()
    } else {
        format!("{ent}.{frac}")
    }
}

fn format_decimal(x: f64) -> String {
    let r = match BigRational::from_float(x) {
        Some(r) => r,
        None => return x.to_string(),
    };

    // 0 et -0 s’affichent "0"
    if r.is_zero() {
        return "0".to_string();
    }

    let neg = r.is_negative();
    let r = r.abs();

    let e = exposant_decimal(&r, x.abs());
    let decimales = CHIFFRES_SIGNIFICATIFS - 1 - e;
    let scaled = arrondi_scale(&r, decimales);

    let txt = scaled_to_decimal(&scaled, decimales);
    if neg && !scaled.is_zero() {
        format!("-{txt}")
    } else {
        txt
    }
}

/// Petit utilitaire de test : vrai si `s` est une écriture scientifique du formateur.
#[cfg(test)]
pub(crate) fn est_scientifique(s: &str) -> bool {
    s.contains('E')
}
