// src/noyau/erreur.rs
//
// Erreurs du noyau. Les caractères parasites ne sont PAS des erreurs (ignorés à la tokenisation),
// et les anomalies arithmétiques (÷0, débordement) donnent inf/NaN, pas une erreur.

use thiserror::Error;

use super::operateurs::Op;

/// Étiquette d’erreur (sans diagnostic).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MismatchedParen,
    ArityUnderflow,
    ArityOverflow,
    EmptyResult,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("parenthèse fermante sans ouvrante")]
    UnmatchedClose,

    #[error("parenthèses non fermées")]
    UnclosedOpen,

    #[error("opérateur '{}' sans deux opérandes", .0.symbol())]
    ArityUnderflow(Op),

    #[error("expression invalide : {0} valeurs sans opérateur pour les combiner")]
    ArityOverflow(usize),

    #[error("aucun nombre dans l’expression")]
    EmptyResult,
}

impl EvalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnmatchedClose | EvalError::UnclosedOpen => ErrorKind::MismatchedParen,
            EvalError::ArityUnderflow(_) => ErrorKind::ArityUnderflow,
            EvalError::ArityOverflow(_) => ErrorKind::ArityOverflow,
            EvalError::EmptyResult => ErrorKind::EmptyResult,
        }
    }
}
