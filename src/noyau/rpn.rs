// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfixe)
// Règles:
// - Number : sortie directe
// - Op(o1) : dépile vers la sortie tant que le sommet est un Op(o2) avec
//     prec(o2) > prec(o1), ou prec(o2) == prec(o1) et o1 associatif à gauche
//   puis empile o1
// - '(' : empile
// - ')' : dépile jusqu’à '(' (jetée) ; pile vide avant => parenthèse orpheline
// - fin : vide la pile ; un '(' restant => parenthèses non fermées
//
// NOTE: pas de moins unaire ici. "-2" donne un '-' sans opérande gauche,
// refusé plus tard par l’évaluateur (ArityUnderflow).

use super::erreur::EvalError;
use super::jetons::Token;
use super::operateurs::{Op, OperatorTable};
use super::Nombre;

/// Élément postfixe : jamais de parenthèse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostfixItem {
    Number(Nombre),
    Op(Op),
}

/// Élément de la pile d’opérateurs (le '(' sert de borne).
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    LParen,
}

/// Convertit une suite de jetons en RPN selon la table d’opérateurs du mode.
///
/// Exemple:
///   tokens: [1, -, 2, -, 3]   -> rpn: [1, 2, -, 3, -]
///   tokens: [2, **, 3, **, 2] -> rpn: [2, 3, 2, **, **]
pub fn to_postfix(tokens: &[Token], table: &OperatorTable) -> Result<Vec<PostfixItem>, EvalError> {
    let mut out: Vec<PostfixItem> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Token::Number(n) => out.push(PostfixItem::Number(n)),

            Token::Op(o1) => {
                while let Some(Pile::Op(o2)) = ops.last().copied() {
                    let p1 = table.precedence(o1);
                    let p2 = table.precedence(o2);

                    let doit_pop = p2 > p1 || (p2 == p1 && table.is_left_associative(o1));
                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    out.push(PostfixItem::Op(o2));
                }
                ops.push(Pile::Op(o1));
            }

            Token::LParen => ops.push(Pile::LParen),

            Token::RParen => loop {
                match ops.pop() {
                    Some(Pile::LParen) => break,
                    Some(Pile::Op(op)) => out.push(PostfixItem::Op(op)),
                    None => return Err(EvalError::UnmatchedClose),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        match top {
            Pile::Op(op) => out.push(PostfixItem::Op(op)),
            Pile::LParen => return Err(EvalError::UnclosedOpen),
        }
    }

    Ok(out)
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_postfix(rpn: &[PostfixItem]) -> String {
    rpn.iter()
        .map(|item| match item {
            PostfixItem::Number(n) => format!("{n}"),
            PostfixItem::Op(op) => op.symbol().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
