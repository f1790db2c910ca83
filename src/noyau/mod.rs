//! Noyau de calcul (pur, sans UI)
//!
//! Organisation interne :
//! - operateurs.rs : table précédence/associativité par mode
//! - normalise.rs  : blancs, suites de signes, suites de parenthèses
//! - jetons.rs     : tokenisation (caractères parasites ignorés)
//! - rpn.rs        : shunting-yard -> RPN
//! - calcul.rs     : évaluation RPN sur pile de valeurs
//! - erreur.rs     : EvalError (kind + diagnostic)
//! - format.rs     : affichage d’un résultat (fini ou non)
//! - eval.rs       : pipeline complet + démarche

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod operateurs;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;


/// Type numérique du pipeline (simple précision, comme la saisie d’origine).
pub type Nombre = f32;

// API publique minimale
pub use erreur::{ErrorKind, EvalError};
pub use eval::{eval_detaille, evaluate_expression, DemarcheNoyau};
pub use operateurs::Mode;
