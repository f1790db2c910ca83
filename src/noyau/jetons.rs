// src/noyau/jetons.rs
//
// Tokenisation par plus long lexème, de gauche à droite.
// Alphabet lexical :
// - nombre décimal : chiffres, optionnellement suivis de '.' + chiffres
// - "**" (testé avant '*')
// - + - * /
// - ( )
// Tout autre caractère est ignoré silencieusement (pas d’erreur).

use super::operateurs::Op;
use super::Nombre;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(Nombre),
    Op(Op),
    LParen,
    RParen,
}

impl Token {
    /// Forme texte canonique du jeton (le nombre est réaffiché, pas recopié).
    pub fn lexeme(&self) -> String {
        match self {
            Token::Number(n) => format!("{n}"),
            Token::Op(op) => op.symbol().to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
        }
    }
}

/// Longueur (en octets) du lexème qui commence en `i`, ou None si `bytes[i]` est parasite.
fn longueur_lexeme(bytes: &[u8], i: usize) -> Option<usize> {
    let c = bytes[i];

    if c.is_ascii_digit() {
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // partie décimale seulement si au moins un chiffre suit le '.'
        if j + 1 < bytes.len() && bytes[j] == b'.' && bytes[j + 1].is_ascii_digit() {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
        }
        return Some(j - i);
    }

    match c {
        b'*' if bytes.get(i + 1) == Some(&b'*') => Some(2),
        b'+' | b'-' | b'*' | b'/' | b'(' | b')' => Some(1),
        _ => None,
    }
}

/// Découpe `s` en lexèmes reconnus (les caractères parasites sont sautés).
///
/// Tous les lexèmes sont ASCII : les découpes tombent toujours sur une frontière de caractère.
pub fn lexemes(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        match longueur_lexeme(bytes, i) {
            Some(n) => {
                out.push(&s[i..i + n]);
                i += n;
            }
            None => i += 1,
        }
    }

    out
}

/// Tokenize une chaîne (normalisée) en jetons.
///
/// Exemple:
///   "2**3-1.5" -> [Number(2), Op(**), Number(3), Op(-), Number(1.5)]
pub fn tokenize(s: &str) -> Vec<Token> {
    lexemes(s).into_iter().filter_map(jeton_de_lexeme).collect()
}

fn jeton_de_lexeme(lex: &str) -> Option<Token> {
    match lex {
        "(" => Some(Token::LParen),
        ")" => Some(Token::RParen),
        _ => match Op::from_symbol(lex) {
            Some(op) => Some(Token::Op(op)),
            // un lexème numérique se parse toujours (débordement => inf)
            None => lex.parse::<Nombre>().ok().map(Token::Number),
        },
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::lexeme)
        .collect::<Vec<_>>()
        .join(" ")
}
