//! Tests scientifiques (campagne) : propriétés observables du pipeline.
//!
//! - deux opérandes : résultat arithmétique exact, formaté
//! - erreurs classées (division par zéro, racine négative, lexique…)
//! - multiplication implicite, carré, parenthèses tolérantes
//! - seuils de la notation scientifique
//! - stabilité : un résultat décimal ré-évalué se redonne lui-même

use super::{evaluate, format_number, preview, ErrorKind};

fn eval_ok(expr: &str) -> String {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_eval(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_err(expr: &str, attendu: ErrorKind) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

/* ------------------------ Deux opérandes ------------------------ */

#[test]
fn sci_deux_operandes() {
    let cas: [(f64, char, f64); 8] = [
        (2.0, '+', 2.0),
        (7.0, '-', 10.0),
        (6.0, '*', 7.0),
        (1.0, '/', 3.0),
        (22.0, '/', 7.0),
        (0.5, '+', 0.25),
        (123.0, '*', 0.001),
        (9.0, '/', 4.0),
    ];

    for (a, op, b) in cas {
        let expr = format!("{a}{op}{b}");
        let exact = match op {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            _ => a / b,
        };
        assert_eq!(eval_ok(&expr), format_number(exact), "expr={expr:?}");
    }

    assert_eval("2+2", "4");
    assert_eval("1/3", "0.333333333333333");
    assert_eval("7-10", "-3");
}

/* ------------------------ Erreurs classées ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_err("5/0", ErrorKind::DivisionByZero);
    assert_err("5/(3-3)", ErrorKind::DivisionByZero);
    assert_err("0/0", ErrorKind::DivisionByZero);
}

#[test]
fn sci_racine_negative() {
    assert_err("sqrt(-4)", ErrorKind::NegativeSquareRoot);
    assert_err("√(-4)", ErrorKind::NegativeSquareRoot);
    assert_err("√(1-5)", ErrorKind::NegativeSquareRoot);
}

#[test]
fn sci_lexique() {
    assert_err("2+x", ErrorKind::LexicalError('x'));
    assert_err("2 + 2", ErrorKind::LexicalError(' '));
    assert_err("1,5", ErrorKind::LexicalError(','));
}

#[test]
fn sci_non_finis() {
    assert_err("(-8)^0.5", ErrorKind::NotANumber);
    assert_err("10^309", ErrorKind::Infinity);
    assert_err("-(10^309)", ErrorKind::Infinity);
}

#[test]
fn sci_expressions_mal_formees() {
    assert_err("3+", ErrorKind::InvalidExpression);
    assert_err("+3", ErrorKind::InvalidExpression);
    assert_err("()", ErrorKind::InvalidExpression);
    assert_err("1.2.3+1", ErrorKind::InvalidExpression);
}

/* ------------------------ sqrt sans argument ------------------------ */

#[test]
fn sci_sqrt_orpheline() {
    assert_err("√(", ErrorKind::InvalidExpression);
    assert_err("sqrt", ErrorKind::InvalidExpression);
    assert_err("2+√", ErrorKind::InvalidExpression);
    assert_eq!(preview("√("), None);
}

/* ------------------------ Préprocesseurs ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    assert_eq!(evaluate("2(3)"), evaluate("2*3"));
    assert_eval("2(3)", "6");
    assert_eval("(2)(3)", "6");
    assert_eval("(2)3", "6");
    assert_eval("2×√(9)", "6");
    // chiffre puis lettre : aucune insertion, deux valeurs restent sur la pile
    assert_err("2√(9)", ErrorKind::InvalidExpression);
}

#[test]
fn sci_carre() {
    assert_eval("2^2", "4");
    assert_eval("2²", "4");
    assert_eval("(1+2)²", "9");
    assert_eval("3²²", "81");
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_eval("-5+2", "-3");
    assert_eval("2*-3", "-6");
    assert_eval("-(2+3)", "-5");
    assert_eval("-3×2", "-6");
    assert_eval("-2^2", "-4");
    assert_eval("2^-1", "0.5");
}

/* ------------------------ Aperçu ------------------------ */

#[test]
fn sci_apercu() {
    assert_eq!(preview("3+"), None);
    assert_eq!(preview("3+4").as_deref(), Some("7"));
    assert_eq!(preview("(2+3").as_deref(), Some("5"));
    assert_eq!(preview("5/0"), None);
}

/* ------------------------ Stabilité ------------------------ */

#[test]
fn sci_idempotence_decimal() {
    for expr in ["1/3", "2/3", "22/7", "0.1+0.2", "√(2)", "-7/9", "123456.789*3"] {
        let une = eval_ok(expr);
        assert!(!une.contains('E'), "expr={expr:?} => {une}");
        let deux = eval_ok(&une);
        assert_eq!(une, deux, "expr={expr:?}");
    }
}

/* ------------------------ Seuils ------------------------ */

#[test]
fn sci_seuils_notation() {
    assert_eval("10000000000", "1.000000E+10");
    assert_eval("12345625000", "1.234563E+10");
    assert_eval("1234562500000", "1.234563E+12");
    assert_eval("100000*100000", "1.000000E+10");
    assert_eval("9999999999", "9999999999");
    assert_eval("1/10000000", "1.000000E-07");
    assert_eval("1/1000000", "0.000001");
}

/* ------------------------ Parenthèses tolérantes ------------------------ */

#[test]
fn sci_parentheses_tolerantes() {
    assert_eval("(2+3", "5");
    assert_eval("((2+3)*2", "10");
    assert_eval("2+3)", "5");
    assert_eval("√(16", "4");
}
