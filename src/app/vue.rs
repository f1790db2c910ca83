// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Sélecteur de mode (Scientific / Accounting), comme le menu numéroté d’origine
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : pavé + opérateurs, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_postfixe::noyau::format::format_nombre;
use calculatrice_postfixe::noyau::{eval_detaille, Mode};

use super::etat::{AppCalc, Demarche, DECIMALES_MAX};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice postfixe");
                ui.add_space(6.0);

                self.ui_mode(ui);

                ui.add_space(6.0);
                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_mode(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Mode :");
            for m in Mode::ALL {
                let texte = format!("{} {}", m.selection(), m.label());
                if ui.radio(self.mode == m, texte).clicked() {
                    self.set_mode(m);
                }
            }
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1+2*3, (1+2)*3, 2**3**2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Actions + décimales
        ui.horizontal(|ui| {
            // C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            let mut fixe = self.decimales.is_some();
            if ui.checkbox(&mut fixe, "Décimales fixes").changed() {
                self.set_decimales(fixe.then_some(2));
            }
            if let Some(d) = self.decimales {
                let mut d = d as u32;
                let resp = ui.add(
                    egui::DragValue::new(&mut d)
                        .speed(1)
                        .range(0..=DECIMALES_MAX as u32),
                );
                if resp.changed() {
                    self.set_decimales(Some(d as usize));
                }
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);
            self.bouton_insert(ui, "**", "**", InsertKind::Op);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, chiffre, InsertKind::Digit);
                    }
                    match ligne[0] {
                        "7" => {
                            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace)
                        }
                        "4" => self.bouton_insert(ui, ".", ".", InsertKind::Digit),
                        _ => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", "0", InsertKind::Digit);
                ui.end_row();
            });
    }

    /// Backspace : retire "**" d’un coup, sinon un caractère.
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        let n = if self.entree.ends_with("**") { 2 } else { 1 };
        for _ in 0..n {
            self.entree.pop();
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let d = &self.demarche;
                Self::champ_demarche(ui, "Mode", "demarche_mode", &d.mode);
                Self::champ_demarche(ui, "Entrée", "demarche_entree", &d.entree);
                Self::champ_demarche(ui, "Validée", "demarche_validee", &d.validee);
                Self::champ_demarche(ui, "Normalisée", "demarche_normalisee", &d.normalisee);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Lecture seule, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::Digit | InsertKind::CloseParen => {
                // collé au jeton précédent
                while kind == InsertKind::CloseParen && self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen => {
                let last = self.entree.chars().rev().find(|c| !c.is_whitespace());
                if matches!(last, Some(c) if c.is_ascii_digit() || c == ')') {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
        }

        self.focus_entree = true;
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat/démarche (ou l’erreur) dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match eval_detaille(&self.entree, self.mode) {
            Ok((valeur, d)) => {
                let d_ui = Demarche {
                    mode: d.mode,
                    entree: d.entree,
                    validee: d.validee,
                    normalisee: d.normalisee,
                    jetons: d.jetons,
                    rpn: d.rpn,
                };
                self.set_resultat(format_nombre(valeur, self.decimales), d_ui);
            }
            Err(e) => self.set_erreur(format!("{:?} : {e}", e.kind())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
