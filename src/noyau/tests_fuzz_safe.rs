//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : une expression binaire bien formée ne produit JAMAIS d’erreur
//!   (le résultat peut être inf/NaN)

use std::time::{Duration, Instant};

use super::operateurs::Mode;
use super::{evaluate_expression, ErrorKind};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        _ => format!("{}", rng.pick(1000)),
    }
}

fn gen_op(rng: &mut Rng) -> &'static str {
    match rng.pick(5) {
        0 => "+",
        1 => "-",
        2 => "*",
        3 => "/",
        _ => "**",
    }
}

/// Expression binaire bien formée.
/// Les groupes sont écrits "(0+…*1)" : jamais deux '(' ni deux ')' collées,
/// donc le compactage des parenthèses ne change pas la structure.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(4) {
        0 => gen_nombre(rng),
        1 => format!("(0+{}*1)", gen_expr(rng, depth - 1)),
        _ => {
            let a = gen_expr(rng, depth - 1);
            let op = gen_op(rng);
            let b = gen_expr(rng, depth - 1);
            if rng.pick(2) == 0 {
                format!("{a}{op}{b}")
            } else {
                format!("{a} {op} {b}")
            }
        }
    }
}

/// Pollue une expression avec des caractères parasites (ignorés à la tokenisation).
fn pollue(rng: &mut Rng, s: &str) -> String {
    const PARASITES: [char; 6] = ['x', '$', 'é', '#', '?', 'π'];
    let mut out = String::new();
    let mut prev = ' ';
    for c in s.chars() {
        // jamais de parasite DANS un lexème : "1x2" deviendrait "12", "*x*" deux '*'
        let dans_lexeme = c.is_ascii_digit() || c == '.' || (c == '*' && prev == '*');
        if !dans_lexeme && rng.pick(6) == 0 {
            out.push(PARASITES[rng.pick(PARASITES.len() as u32) as usize]);
        }
        out.push(c);
        prev = c;
    }
    out
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_formees_sans_erreur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_fini = 0usize;
    let mut seen_non_fini = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);
        for mode in Mode::ALL {
            match evaluate_expression(&expr, mode) {
                Ok(v) if v.is_finite() => seen_fini += 1,
                Ok(_) => seen_non_fini += 1,
                Err(e) => panic!("erreur non attendue: expr={expr:?} mode={mode:?} err={e}"),
            }
        }
    }

    // On veut voir des résultats finis ET non finis (0 est fréquent en diviseur).
    assert!(seen_fini > 30, "trop peu de finis: {seen_fini}");
    assert!(seen_non_fini > 0, "aucun non fini vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(0xBADC0DE_u64);
    let mut b = Rng::new(0xBADC0DE_u64);

    for _ in 0..100 {
        let ea = gen_expr(&mut a, 4);
        let eb = gen_expr(&mut b, 4);
        assert_eq!(ea, eb);

        let ra = evaluate_expression(&ea, Mode::Scientific);
        let rb = evaluate_expression(&eb, Mode::Scientific);
        match (ra, rb) {
            (Ok(x), Ok(y)) => assert!(x == y || (x.is_nan() && y.is_nan())),
            (ra, rb) => panic!("expr={ea:?} : {ra:?} / {rb:?}"),
        }
    }
}

#[test]
fn fuzz_safe_parasites_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..150 {
        budget(t0, max);

        let propre = gen_expr(&mut rng, 4);
        let sale = pollue(&mut rng, &propre);

        let a = evaluate_expression(&propre, Mode::Scientific);
        let b = evaluate_expression(&sale, Mode::Scientific);
        match (a, b) {
            (Ok(x), Ok(y)) => assert!(
                x == y || (x.is_nan() && y.is_nan()),
                "propre={propre:?} sale={sale:?} : {x} / {y}"
            ),
            (a, b) => panic!("propre={propre:?} sale={sale:?} : {a:?} / {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_troncatures_jamais_de_panique() {
    // Préfixes arbitraires d’expressions valides : erreurs permises, panique interdite.
    let mut rng = Rng::new(0xFEED_u64);

    for _ in 0..100 {
        let expr = gen_expr(&mut rng, 4);
        let coupe = rng.pick(expr.len() as u32 + 1) as usize;
        let prefixe: String = expr.chars().take(coupe).collect();

        if let Err(e) = evaluate_expression(&prefixe, Mode::Scientific) {
            // seule une expression coupée dans une parenthèse peut la déséquilibrer
            if e.kind() == ErrorKind::MismatchedParen {
                assert!(prefixe.contains('('), "prefixe={prefixe:?} err={e}");
            }
            assert!(!e.to_string().is_empty());
        }
    }
}

#[test]
fn fuzz_safe_longue_chaine_anti_pile() {
    // 2000 termes : pile de valeurs et pile d’opérateurs restent linéaires
    let expr = vec!["1"; 2000].join("+");
    let v = evaluate_expression(&expr, Mode::Scientific).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 2000.0);

    let expr = vec!["1"; 500].join("**");
    let v = evaluate_expression(&expr, Mode::Scientific).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 1.0);
}
