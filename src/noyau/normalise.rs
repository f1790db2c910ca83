// src/noyau/normalise.rs
//
// Normalisation de l’entrée brute, AVANT tokenisation :
// 1) retire les espaces
// 2) suites de signes (2+ de '+'/'-') -> un seul signe (parité des '-')
// 3) suites de '(' -> '('
// 4) suites de ')' -> ')'
//
// Chaque passe est linéaire et n’introduit jamais de nouvelle suite pour les passes suivantes.

use super::jetons::lexemes;

/// Retire tous les blancs (espaces, tabulations, retours ligne).
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalise une entrée brute (blancs retirés, signes et parenthèses compactés).
///
/// Exemple:
///   "1 ++-+- 2"      -> "1+2"
///   "((1+2))*((3))"  -> "(1+2)*(3)"
pub fn normalize(raw: &str) -> String {
    let s = strip_whitespace(raw);
    let s = collapse_signes(&s);
    let s = collapse_suite(&s, '(');
    collapse_suite(&s, ')')
}

/// Filtre lexical : ne garde que les lexèmes reconnus (nombres, opérateurs, parenthèses).
/// Ce qui reste est la concaténation des lexèmes, sans aucun caractère parasite.
pub fn validate_input(raw: &str) -> String {
    let s = strip_whitespace(raw);
    lexemes(&s).concat()
}

/// Signe équivalent à une suite de '+'/'-' : '-' si le nombre de '-' est impair.
fn signe_de_suite(nb_moins: usize) -> char {
    if nb_moins % 2 == 0 {
        '+'
    } else {
        '-'
    }
}

fn collapse_signes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    // suite courante : (longueur, nombre de '-', premier caractère)
    let mut longueur = 0usize;
    let mut nb_moins = 0usize;
    let mut premier = '+';

    for c in s.chars() {
        if c == '+' || c == '-' {
            if longueur == 0 {
                premier = c;
            }
            longueur += 1;
            if c == '-' {
                nb_moins += 1;
            }
            continue;
        }

        vide_suite(&mut out, longueur, nb_moins, premier);
        longueur = 0;
        nb_moins = 0;
        out.push(c);
    }
    vide_suite(&mut out, longueur, nb_moins, premier);

    out
}

fn vide_suite(out: &mut String, longueur: usize, nb_moins: usize, premier: char) {
    match longueur {
        0 => {}
        1 => out.push(premier),
        _ => out.push(signe_de_suite(nb_moins)),
    }
}

/// Remplace toute suite de `c` (2 ou plus) par un seul `c`.
fn collapse_suite(s: &str, c: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;

    for x in s.chars() {
        if x == c && prev == Some(c) {
            continue;
        }
        out.push(x);
        prev = Some(x);
    }

    out
}
