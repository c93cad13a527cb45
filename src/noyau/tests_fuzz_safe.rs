//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : preview(s) == evaluate(s).ok() dès que s ne finit pas par un opérateur

use std::time::{Duration, Instant};

use super::{evaluate, preview, ErrorKind};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Alphabet du clavier de l’hôte (glyphes compris).
const CLAVIER: [&str; 20] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "^", "(", ")", "√(",
    "²",
];

fn gen_frappes(rng: &mut Rng, n: usize) -> String {
    let mut s = String::new();
    for _ in 0..n {
        s.push_str(CLAVIER[rng.pick(CLAVIER.len() as u32) as usize]);
    }
    s
}

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}", rng.pick(1000)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        _ => format!("0.{:03}", rng.pick(1000)),
    }
}

/// Expressions bien formées (parenthèses équilibrées, opérandes présents).
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }
    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    match rng.pick(7) {
        0 => format!("({a}+{b})"),
        1 => format!("({a}-{b})"),
        2 => format!("({a}×{b})"),
        3 => format!("({a}÷{b})"),
        4 => format!("√({a})"),
        5 => format!("({a})²"),
        _ => gen_nombre(rng),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_frappes_aleatoires_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let n = 1 + rng.pick(14) as usize;
        let expr = gen_frappes(&mut rng, n);

        let complet = evaluate(&expr);
        let apercu = preview(&expr);

        // aucune erreur lexicale : tout vient du clavier
        assert!(
            !matches!(complet, Err(ErrorKind::LexicalError(_))),
            "lexique inattendu: expr={expr:?}"
        );

        // l’aperçu n’invente rien : s’il existe, c’est le résultat complet
        if let Some(v) = &apercu {
            assert_eq!(complet.as_ref().ok(), Some(v), "expr={expr:?}");
        }

        match complet {
            Ok(_) => seen_ok += 1,
            Err(_) => seen_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 5, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 5, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match evaluate(&expr) {
            Ok(v) => {
                assert_eq!(preview(&expr).as_deref(), Some(v.as_str()), "expr={expr:?}");
            }
            Err(e) => {
                // domaine volontairement limité : seules ces erreurs sont normales ici
                assert!(
                    matches!(
                        e,
                        ErrorKind::DivisionByZero
                            | ErrorKind::NegativeSquareRoot
                            | ErrorKind::Infinity
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                assert_eq!(preview(&expr), None);
            }
        }
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);

    for _ in 0..100 {
        let a = gen_frappes(&mut r1, 8);
        let b = gen_frappes(&mut r2, 8);
        assert_eq!(a, b);
        assert_eq!(evaluate(&a), evaluate(&b));
    }
}

#[test]
fn fuzz_safe_longue_chaine_lineaire() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // 5000 termes : pas de récursion, pile explicite
    let expr = vec!["0.5"; 5000].join("+");
    let v = evaluate(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);
    assert_eq!(v, "2500");

    let parens = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(evaluate(&parens).as_deref(), Ok("1"));
}
