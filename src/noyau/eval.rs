//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> multiplications implicites -> jetons -> RPN -> pile f64 -> format
//!
//! Aucun état entre deux appels : `evaluate` et `preview` sont des fonctions pures
//! de la chaîne d’entrée. La “mémoire” (dernier résultat) appartient à l’hôte.

use tracing::debug;

use super::erreur::ErrorKind;
use super::format::format_number;
use super::implicite::inserer_multiplications;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::symboles::normaliser;

/// Trace d’une évaluation (panneau “Démarche” de l’hôte).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    /// Texte après normalisation + multiplications implicites.
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évaluation complète (validation “=”).
///
/// Entrée vide => "0".
pub fn evaluate(expression: &str) -> Result<String, ErrorKind> {
    evaluate_traced(expression).1
}

/// Comme `evaluate`, avec la démarche remplie jusqu’à l’étape atteinte.
pub fn evaluate_traced(expression: &str) -> (DemarcheNoyau, Result<String, ErrorKind>) {
    let mut d = DemarcheNoyau::default();
    let res = pipeline(expression, &mut d);
    if let Err(e) = &res {
        debug!(expression, erreur = %e, "évaluation refusée");
    }
    (d, res)
}

/// Aperçu “live” : jamais d’erreur vers l’appelant.
///
/// None si l’entrée est vide, se termine par un opérateur binaire,
/// ou échoue à n’importe quelle étape du pipeline.
pub fn preview(expression: &str) -> Option<String> {
    if expression.is_empty() || finit_par_operateur(expression) {
        return None;
    }
    evaluate(expression).ok()
}

fn finit_par_operateur(s: &str) -> bool {
    s.chars()
        .last()
        .is_some_and(|c| matches!(c, '+' | '-' | '*' | '/' | '^' | '×' | '÷'))
}

fn pipeline(expression: &str, d: &mut DemarcheNoyau) -> Result<String, ErrorKind> {
    if expression.is_empty() {
        return Ok("0".to_string());
    }

    // 1) Prétraitement (glyphes AVANT multiplications implicites)
    let texte = inserer_multiplications(&normaliser(expression));
    d.normalise = texte.clone();

    // 2) Jetons
    let jetons = tokenize(&texte)?;
    d.jetons = format_tokens(&jetons);

    // 3) RPN
    let rpn = to_rpn(&jetons);
    d.rpn = format_tokens(&rpn);
    debug!(jetons = %d.jetons, rpn = %d.rpn, "expression convertie");

    // 4) Valeur + affichage
    let v = eval_rpn(&rpn)?;
    Ok(format_number(v))
}
