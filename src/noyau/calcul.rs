// src/noyau/calcul.rs
//
// Évaluation d’une RPN sur une pile de valeurs.
// - Op : dépile droite PUIS gauche (l’ordre compte pour - / **)
// - aucune garde arithmétique : ÷0 => ±inf ou NaN, et ça se propage normalement
// - le résultat est le sommet final, même non fini

use num_traits::Float;

use super::erreur::EvalError;
use super::operateurs::Op;
use super::rpn::PostfixItem;
use super::Nombre;

/// Applique un opérateur binaire (sémantique IEEE, sans piège).
pub fn applique<F: Float>(op: Op, gauche: F, droite: F) -> F {
    match op {
        Op::Plus => gauche + droite,
        Op::Minus => gauche - droite,
        Op::Star => gauche * droite,
        Op::Slash => gauche / droite,
        Op::StarStar => gauche.powf(droite),
    }
}

/// Évalue une RPN.
///
/// Erreurs :
/// - RPN vide => EmptyResult
/// - opérateur avec moins de deux valeurs => ArityUnderflow
/// - plus d’une valeur à la fin => ArityOverflow
pub fn evaluate_postfix(rpn: &[PostfixItem]) -> Result<Nombre, EvalError> {
    let mut st: Vec<Nombre> = Vec::with_capacity(rpn.len());

    for item in rpn.iter().copied() {
        match item {
            PostfixItem::Number(n) => st.push(n),
            PostfixItem::Op(op) => {
                let droite = st.pop().ok_or(EvalError::ArityUnderflow(op))?;
                let gauche = st.pop().ok_or(EvalError::ArityUnderflow(op))?;
                st.push(applique(op, gauche, droite));
            }
        }
    }

    match st.len() {
        0 => Err(EvalError::EmptyResult),
        1 => st.pop().ok_or(EvalError::EmptyResult),
        n => Err(EvalError::ArityOverflow(n)),
    }
}
