//! Calculatrice postfixe — bibliothèque
//!
//! Le noyau (pur) est exposé ici pour l’UI (src/main.rs) et pour tout autre appelant :
//! une chaîne + un mode en entrée, un nombre (ou une EvalError) en sortie.

pub mod noyau;

pub use noyau::{evaluate_expression, ErrorKind, EvalError, Mode};
