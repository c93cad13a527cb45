//! Noyau — évaluateur d’expression arithmétique
//!
//! Organisation interne :
//! - symboles.rs  : glyphes d’affichage (× ÷ √ ²) -> symboles de calcul
//! - implicite.rs : multiplications implicites (2(3), (1)(2), (2)3)
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + évaluation de la RPN
//! - format.rs    : affichage (scientifique / 15 chiffres significatifs)
//! - erreur.rs    : taxonomie des erreurs
//! - eval.rs      : pipeline complet (evaluate / preview)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod implicite;
pub mod jetons;
pub mod rpn;
pub mod symboles;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErrorKind;
pub use eval::{evaluate, evaluate_traced, preview, DemarcheNoyau};
pub use format::format_number;
