// src/app.rs
//
// Calculatrice & simulateur — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = effacer le résultat de l’écran courant.
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            match self.ecran {
                etat::Ecran::Calculatrice => self.clear_calc(),
                etat::Ecran::Simulateur => self.clear_simu(),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
