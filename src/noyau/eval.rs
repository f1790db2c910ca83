//! Noyau — évaluation (pipeline réel)
//!
//! entrée brute -> normalize -> tokenize -> to_postfix (table du mode) -> evaluate_postfix
//!
//! Chaque étape est une fonction pure : rien n’est partagé entre deux appels.

use super::calcul::evaluate_postfix;
use super::erreur::EvalError;
use super::jetons::{format_tokens, tokenize};
use super::normalise::{normalize, validate_input};
use super::operateurs::{operator_table, Mode};
use super::rpn::{format_postfix, to_postfix};
use super::Nombre;

/// Trace du pipeline (panneau “Démarche”).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub mode: String,
    pub entree: String,
    pub validee: String,
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression dans un mode.
pub fn evaluate_expression(raw: &str, mode: Mode) -> Result<Nombre, EvalError> {
    eval_detaille(raw, mode).map(|(valeur, _d)| valeur)
}

/// Variante tracée : retourne la valeur ET la démarche (entrée, filtrée, normalisée, jetons, RPN).
pub fn eval_detaille(raw: &str, mode: Mode) -> Result<(Nombre, DemarcheNoyau), EvalError> {
    let table = operator_table(mode);

    // 1) Normalisation (blancs, signes, parenthèses)
    let normalisee = normalize(raw);

    // 2) Jetons (parasites ignorés)
    let jetons = tokenize(&normalisee);

    // 3) RPN
    let rpn = to_postfix(&jetons, &table)?;

    // 4) Pile de valeurs
    let valeur = evaluate_postfix(&rpn)?;

    let d = DemarcheNoyau {
        mode: mode.label().to_string(),
        entree: raw.trim().to_string(),
        validee: validate_input(raw),
        normalisee,
        jetons: format_tokens(&jetons),
        rpn: format_postfix(&rpn),
    };

    Ok((valeur, d))
}
