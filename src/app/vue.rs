// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Deux zones de sortie rendues TELLES QUELLES : historique + valeur
// - Tactile : gros boutons, grille 4 colonnes
//
// Note :
// - Les frappes clavier sont captées dans app.rs (pas de champ texte ici,
//   donc pas de question de focus).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Jeton, Op};

/// Taille des touches du pavé.
const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /* ------------------------ Écran (les deux projections) ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Historique : petit, aligné à droite, rendu verbatim
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let historique = self.evaluateur.historique();
                    ui.monospace(if historique.is_empty() { " " } else { historique });
                });

                // Valeur courante : grande, alignée à droite, rendu verbatim
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let texte = egui::RichText::new(self.evaluateur.affichage())
                        .monospace()
                        .size(34.0);
                    if self.evaluateur.en_erreur() {
                        ui.label(texte.color(ui.visuals().error_fg_color));
                    } else {
                        ui.label(texte);
                    }
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "Remise à zéro totale", Jeton::Effacer);
                self.bouton(ui, "CE", "Efface l'entrée en cours", Jeton::EffacerEntree);
                self.bouton(ui, "DEL", "Efface le dernier caractère", Jeton::RetourArriere);
                self.bouton_op(ui, Op::Divise);
                ui.end_row();

                self.bouton_chiffre(ui, 7);
                self.bouton_chiffre(ui, 8);
                self.bouton_chiffre(ui, 9);
                self.bouton_op(ui, Op::Fois);
                ui.end_row();

                self.bouton_chiffre(ui, 4);
                self.bouton_chiffre(ui, 5);
                self.bouton_chiffre(ui, 6);
                self.bouton_op(ui, Op::Moins);
                ui.end_row();

                self.bouton_chiffre(ui, 1);
                self.bouton_chiffre(ui, 2);
                self.bouton_chiffre(ui, 3);
                self.bouton_op(ui, Op::Plus);
                ui.end_row();

                self.bouton_chiffre(ui, 0);
                self.bouton(ui, ".", "Point décimal", Jeton::Point);
                ui.label("");
                self.bouton(ui, "=", "Évalue l'opération en attente", Jeton::Egal);
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, jeton: Jeton) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.jeton(jeton);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: u8) {
        let label = d.to_string();
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(label));
        if resp.clicked() {
            self.jeton(Jeton::Chiffre(d));
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Op) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(op.glyphe()));
        if resp.clicked() {
            self.jeton(Jeton::Operateur(op));
        }
    }
}
