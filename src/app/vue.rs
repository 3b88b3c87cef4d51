// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Deux écrans : Calculatrice (7 opérations + polynôme) et Simulateur (dé, pièce, cartes).
// Un clic = une requête au noyau ; la réponse (ou l’erreur) est déposée dans l’état.
// Aucune mise en forme numérique ici : équations et fréquences viennent du noyau.

use eframe::egui;

use super::etat::{AppCalc, Choix, Ecran, Message, TypeExperience};
use crate::noyau;
use crate::noyau::arith::Operation;
use crate::noyau::nombre::format_nombre;
use crate::noyau::simulation::{ESSAIS_MAX, ESSAIS_MIN, TIRAGE_MAX, TIRAGE_MIN};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.ecran, Ecran::Calculatrice, "Calculatrice");
            ui.selectable_value(&mut self.ecran, Ecran::Simulateur, "Simulateur");
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| match self.ecran {
                Ecran::Calculatrice => self.ui_calculatrice(ui),
                Ecran::Simulateur => self.ui_simulateur(ui),
            });
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.heading("Calculatrice");
        ui.add_space(6.0);

        let mut choix = self.choix;
        egui::ComboBox::from_id_salt("choix_operation")
            .selected_text(choix.libelle())
            .width(220.0)
            .show_ui(ui, |ui| {
                for op in Operation::TOUTES {
                    ui.selectable_value(&mut choix, Choix::Arith(op), op.libelle());
                }
                ui.selectable_value(&mut choix, Choix::Polynome, Choix::Polynome.libelle());
            });
        self.set_choix(choix);

        ui.add_space(8.0);

        match self.choix {
            Choix::Polynome => self.ui_saisie_polynome(ui),
            Choix::Arith(op) => self.ui_saisie_operandes(ui, op),
        }

        ui.add_space(8.0);

        let calc = ui.add_sized([120.0, 32.0], egui::Button::new("Calculer"));
        if calc.clicked() {
            self.calculer_via_noyau();
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        if let Some(m) = &self.message_calc {
            Self::ui_message(ui, m);
        } else if let Some(e) = &self.evaluation {
            ui.label("Équation :");
            Self::champ_monospace(ui, "equation_out", &e.equation, 1);
            ui.add_space(6.0);
            ui.label("Résultat :");
            Self::champ_monospace(ui, "resultat_out", &format_nombre(e.valeur), 1);
        }
    }

    fn ui_saisie_operandes(&mut self, ui: &mut egui::Ui, op: Operation) {
        let (titre_a, titre_b) = match op {
            Operation::Logarithme => ("Argument :", "Base :"),
            Operation::Puissance => ("Base :", "Exposant :"),
            _ => ("Premier nombre :", "Second nombre :"),
        };

        egui::Grid::new("operandes")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(titre_a);
                ui.add(egui::DragValue::new(&mut self.a).speed(1.0));
                ui.end_row();

                ui.label(titre_b);
                ui.add(egui::DragValue::new(&mut self.b).speed(1.0));
                ui.end_row();
            });
    }

    fn ui_saisie_polynome(&mut self, ui: &mut egui::Ui) {
        ui.label("Coefficients, du plus haut degré à la constante, séparés par des virgules :");
        ui.add(
            egui::TextEdit::singleline(&mut self.coefficients)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3, -2, 1  pour  3x^2 - 2x + 1")
                .code_editor(),
        );

        ui.horizontal(|ui| {
            ui.label("x :");
            ui.add(egui::DragValue::new(&mut self.x).speed(0.1));
        });
    }

    fn calculer_via_noyau(&mut self) {
        let reponse = noyau::traiter(&self.requete_calcul());
        self.deposer_calcul(reponse);
    }

    /* ------------------------ Simulateur ------------------------ */

    fn ui_simulateur(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulateur");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.radio_value(&mut self.type_experience, TypeExperience::De, "Dé");
            ui.radio_value(&mut self.type_experience, TypeExperience::Piece, "Pièce");
            ui.radio_value(&mut self.type_experience, TypeExperience::Carte, "Cartes");
        });

        ui.add_space(6.0);

        egui::Grid::new("parametres_simulation")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Essais :");
                let mut n = self.essais;
                let resp = ui.add(
                    egui::DragValue::new(&mut n)
                        .speed(10)
                        .range(ESSAIS_MIN..=ESSAIS_MAX),
                );
                if resp.changed() {
                    self.set_essais(n);
                }
                ui.end_row();

                if self.type_experience == TypeExperience::Carte {
                    ui.label("Cartes par tirage :");
                    let mut t = self.tirage;
                    let resp = ui.add(
                        egui::DragValue::new(&mut t)
                            .speed(1)
                            .range(TIRAGE_MIN..=TIRAGE_MAX),
                    );
                    if resp.changed() {
                        self.set_tirage(t);
                    }
                    ui.end_row();
                }

                ui.checkbox(&mut self.graine_fixe, "Graine fixe :");
                ui.add_enabled(self.graine_fixe, egui::DragValue::new(&mut self.graine));
                ui.end_row();
            });

        ui.add_space(8.0);

        let go = ui.add_sized([120.0, 32.0], egui::Button::new("Lancer"));
        if go.clicked() {
            self.simuler_via_noyau();
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        if let Some(m) = &self.message_simu {
            Self::ui_message(ui, m);
        } else {
            self.ui_frequences(ui);
        }
    }

    fn ui_frequences(&self, ui: &mut egui::Ui) {
        let Some(s) = &self.simulation else {
            return;
        };

        ui.label(format!("{} — {} essais", s.experience.libelle(), s.essais));
        ui.add_space(4.0);

        let lignes = s.frequences.dans_l_ordre(&s.experience.etiquettes());
        let max = lignes.iter().map(|(_, n)| *n).max().unwrap_or(1).max(1);

        egui::Grid::new("frequences")
            .num_columns(3)
            .striped(true)
            .spacing([12.0, 4.0])
            .show(ui, |ui| {
                for (issue, n) in &lignes {
                    ui.monospace(issue);
                    ui.monospace(n.to_string());
                    ui.add(
                        egui::ProgressBar::new(*n as f32 / max as f32)
                            .desired_width(220.0)
                            .text(format!("{:.1} %", 100.0 * s.frequences.proportion(issue))),
                    );
                    ui.end_row();
                }
            });
    }

    fn simuler_via_noyau(&mut self) {
        let reponse = noyau::traiter(&self.requete_simulation());
        self.deposer_simulation(reponse);
    }

    /* ------------------------ Helpers ------------------------ */

    fn ui_message(ui: &mut egui::Ui, m: &Message) {
        let couleur = if m.avertissement {
            ui.visuals().warn_fg_color
        } else {
            ui.visuals().error_fg_color
        };
        ui.colored_label(couleur, &m.texte);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
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
}
