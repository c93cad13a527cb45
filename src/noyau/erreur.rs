// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie fermée des échecs du noyau.
///
/// Chaque étape du pipeline échoue à la première erreur rencontrée ;
/// `preview` les absorbe toutes, `evaluate` les remonte telles quelles.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caractère hors de l’alphabet accepté (lexique).
    #[error("caractère inattendu: '{0}'")]
    LexicalError(char),

    /// Postfixe mal formé : opérande manquant, ou pile finale ≠ 1 valeur.
    #[error("expression invalide")]
    InvalidExpression,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("racine carrée d’un nombre négatif")]
    NegativeSquareRoot,

    #[error("résultat non numérique")]
    NotANumber,

    #[error("résultat infini")]
    Infinity,
}
