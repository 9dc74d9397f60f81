// src/app.rs
//
// Calculatrice enchaînée — module App (racine)
// --------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Il n'y a aucun champ texte : tout le clavier est lu ici, globalement,
//   et traduit en jetons. Pas de risque de double déclenchement par focus.
// - La vue ne fait que dessiner ; l'état (etat.rs) filtre les jetons.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Jeton;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.gerer_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

impl AppCalc {
    /// Traduit les évènements clavier de la frame en jetons.
    ///
    /// Caractères ('0'..'9', '.', '+', '-', '*', '/', '=') via l'alphabet du
    /// noyau ; touches de contrôle mappées ici :
    /// - Enter     = égal
    /// - Backspace = DEL
    /// - Escape    = C
    /// - Delete    = CE
    fn gerer_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());
        for evenement in evenements {
            match evenement {
                egui::Event::Text(texte) => {
                    for c in texte.chars() {
                        if let Some(jeton) = Jeton::depuis_char(c) {
                            self.jeton(jeton);
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let jeton = match key {
                        egui::Key::Enter => Some(Jeton::Egal),
                        egui::Key::Backspace => Some(Jeton::RetourArriere),
                        egui::Key::Escape => Some(Jeton::Effacer),
                        egui::Key::Delete => Some(Jeton::EffacerEntree),
                        _ => None,
                    };
                    if let Some(jeton) = jeton {
                        self.jeton(jeton);
                    }
                }
                _ => {}
            }
        }
    }
}
