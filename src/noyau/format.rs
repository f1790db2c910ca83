// src/noyau/format.rs
//
// Affichage d’un résultat numérique (fini ou non).

use std::fmt::Display;

use num_traits::Float;

/// Formate un résultat pour l’affichage.
/// - `decimales = None` : représentation la plus courte qui relit la même valeur
/// - `decimales = Some(k)` : k chiffres après la virgule (arrondi)
/// - non fini : "+∞", "-∞", "NaN"
/// - -0 s’affiche "0"
pub fn format_nombre<F: Float + Display>(x: F, decimales: Option<usize>) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            "+∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    // -0 => 0
    let x = if x.is_zero() { F::zero() } else { x };

    let s = match decimales {
        None => format!("{x}"),
        Some(k) => format!("{:.*}", k, x),
    };

    // un arrondi peut produire "-0.00" : on retire le signe
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
