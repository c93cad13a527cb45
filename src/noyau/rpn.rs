// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - sqrt : fonction préfixe, posée sur la pile d’opérateurs ;
//   sort à la parenthèse fermante de son argument, ou dès qu’un opérateur
//   binaire arrive (argument “nu” : "sqrt4+1" => "4 sqrt 1 +").
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur,
//   il devient Fonction(Oppose) : "-x" => "x neg".
// - Parenthèses : aucune validation d’équilibre.
//   ')' en trop : ignorée ; '(' non fermée : jetée en fin de conversion.

use tracing::debug;

use super::erreur::ErrorKind;
use super::jetons::{Fonction, Operateur, Tok};

/// Précédence d’une entrée de la pile d’opérateurs ('(' = barrière).
fn precedence(t: &Tok) -> Option<u8> {
    match t {
        Tok::Op(op) => Some(op.precedence()),
        Tok::Fonction(f) => Some(f.precedence()),
        _ => None,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(Racine), LPar, Num(9), RPar, Op(Plus), Num(1)]
///   rpn:    [Num(9), Fonction(Racine), Num(1), Op(Plus)]
///
/// Ne peut pas échouer : les formes mal construites sont détectées par `eval_rpn`.
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(_) => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Op(Operateur::Moins) if !prev_was_value => {
                ops.push(Tok::Fonction(Fonction::Oppose));
            }

            Tok::Op(op) => {
                // dépile tant que le sommet lie au moins aussi fort (égalité => on sort : assoc. gauche)
                while let Some(p_top) = ops.last().and_then(precedence) {
                    if p_top < op.precedence() {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' (absente => toute la pile sort)
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        break;
                    }
                    out.push(top);
                }

                // sqrt(x) => x sqrt
                if ops.last() == Some(&Tok::Fonction(Fonction::Racine)) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }
        }
    }

    // vide la pile ops ; les '(' non fermées disparaissent
    while let Some(op) = ops.pop() {
        if op != Tok::LPar {
            out.push(op);
        }
    }

    out
}

/// Évalue une RPN sur une pile de f64.
///
/// - opérande manquant ou pile finale ≠ 1 valeur => `InvalidExpression`
/// - NaN / ±∞ en sortie => `NotANumber` / `Infinity`
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErrorKind> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(texte) => {
                let v = texte
                    .parse::<f64>()
                    .map_err(|_| ErrorKind::InvalidExpression)?;
                st.push(v);
            }

            Tok::Fonction(f) => {
                let x = st.pop().ok_or(ErrorKind::InvalidExpression)?;
                let v = match f {
                    Fonction::Racine => {
                        if x < 0.0 {
                            return Err(ErrorKind::NegativeSquareRoot);
                        }
                        x.sqrt()
                    }
                    Fonction::Oppose => -x,
                };
                st.push(v);
            }

            Tok::Op(op) => {
                if st.len() < 2 {
                    return Err(ErrorKind::InvalidExpression);
                }
                let b = st.pop().ok_or(ErrorKind::InvalidExpression)?;
                let a = st.pop().ok_or(ErrorKind::InvalidExpression)?;

                let v = match op {
                    Operateur::Plus => a + b,
                    Operateur::Moins => a - b,
                    Operateur::Fois => a * b,
                    Operateur::Divise => {
                        if b == 0.0 {
                            return Err(ErrorKind::DivisionByZero);
                        }
                        a / b
                    }
                    Operateur::Puissance => a.powf(b),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErrorKind::InvalidExpression),
        }
    }

    if st.len() != 1 {
        debug!(restant = st.len(), "pile finale mal réduite");
        return Err(ErrorKind::InvalidExpression);
    }
    let v = st.pop().ok_or(ErrorKind::InvalidExpression)?;

    if v.is_nan() {
        return Err(ErrorKind::NotANumber);
    }
    if v.is_infinite() {
        return Err(ErrorKind::Infinity);
    }
    Ok(v)
}
