//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (mode, entrée, résultat, erreur, décimales, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_postfixe::noyau::Mode;

/// Mode au démarrage (équivaut au choix "1" du menu).
const MODE_DEFAUT: Mode = Mode::Scientific;

/// Garde-fou : f32 ne porte qu’environ 7 chiffres significatifs.
pub const DECIMALES_MAX: usize = 9;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub mode: String,
    pub entree: String,
    pub validee: String,
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- paramètres ---
    pub mode: Mode,
    pub decimales: Option<usize>, // None = représentation la plus courte

    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            mode: MODE_DEFAUT,
            decimales: None,
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.mode = MODE_DEFAUT;
        self.decimales = None;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Place une erreur. Le dernier résultat reste affiché ; la démarche est effacée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.focus_entree = true;
    }

    /// Garde-fou : borne les décimales.
    pub fn set_decimales(&mut self, decimales: Option<usize>) {
        self.decimales = decimales.map(|d| d.min(DECIMALES_MAX));
        self.focus_entree = true;
    }
}
