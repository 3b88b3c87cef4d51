//! src/app/etat.rs
//!
//! État UI (sans vue, sans calcul).
//!
//! Rôle : contenir les saisies des deux écrans (calculatrice, simulateur) et le dernier
//! résultat ou la dernière erreur, avec des actions simples (effacer, bornes).
//!
//! Contrats :
//! - Aucune évaluation ici : la vue construit une `RequeteCalcul` et dépose la réponse.
//! - Une erreur efface le résultat : jamais d’affichage partiel ou périmé.
//! - Bornes appliquées ici (le noyau ne revalide pas) : essais, cartes par tirage.

use crate::noyau::arith::Operation;
use crate::noyau::erreur::{ErreurCalcul, Resultat};
use crate::noyau::simulation::{
    Experience, ESSAIS_DEFAUT, ESSAIS_MAX, ESSAIS_MIN, TIRAGE_MAX, TIRAGE_MIN,
};
use crate::noyau::{ConfigSimulation, Evaluation, Reponse, RequeteCalcul, ResultatSimulation};

/// Coefficients par défaut : x^2.
const COEFFS_DEFAUT: &str = "1, 0, 0";

/// Point d’évaluation par défaut.
const X_DEFAUT: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ecran {
    Calculatrice,
    Simulateur,
}

/// Choix du menu : une des 7 opérations, ou le polynôme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choix {
    Arith(Operation),
    Polynome,
}

impl Choix {
    pub fn libelle(self) -> &'static str {
        match self {
            Choix::Arith(op) => op.libelle(),
            Choix::Polynome => "Polynôme P(x)",
        }
    }
}

/// Type d’expérience (sans paramètre) pour les boutons radio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeExperience {
    De,
    Piece,
    Carte,
}

/// Message affiché : erreur bloquante ou avertissement (bloquant aussi).
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub texte: String,
    pub avertissement: bool,
}

impl From<&ErreurCalcul> for Message {
    fn from(e: &ErreurCalcul) -> Self {
        Self {
            texte: e.to_string(),
            avertissement: e.est_avertissement(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub ecran: Ecran,

    // --- calculatrice ---
    pub choix: Choix,
    pub a: f64,
    pub b: f64,
    pub coefficients: String,
    pub x: f64,
    pub evaluation: Option<Evaluation>,
    pub message_calc: Option<Message>,

    // --- simulateur ---
    pub type_experience: TypeExperience,
    pub essais: usize,
    pub tirage: usize,
    pub graine_fixe: bool,
    pub graine: u64,
    pub simulation: Option<ResultatSimulation>,
    pub message_simu: Option<Message>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            ecran: Ecran::Calculatrice,
            choix: Choix::Arith(Operation::Addition),
            a: 0.0,
            b: 0.0,
            coefficients: COEFFS_DEFAUT.to_string(),
            x: X_DEFAUT,
            evaluation: None,
            message_calc: None,
            type_experience: TypeExperience::De,
            essais: ESSAIS_DEFAUT,
            tirage: TIRAGE_MIN,
            graine_fixe: false,
            graine: 0,
            simulation: None,
            message_simu: None,
        }
    }
}

impl AppCalc {
    /* ------------------------ Requêtes (lecture seule) ------------------------ */

    /// Requête de l’écran calculatrice.
    pub fn requete_calcul(&self) -> RequeteCalcul {
        match self.choix {
            Choix::Arith(op) => RequeteCalcul::Arith {
                op,
                a: self.a,
                b: self.b,
            },
            Choix::Polynome => RequeteCalcul::Polynome {
                coefficients: self.coefficients.clone(),
                x: self.x,
            },
        }
    }

    pub fn experience(&self) -> Experience {
        match self.type_experience {
            TypeExperience::De => Experience::De,
            TypeExperience::Piece => Experience::Piece,
            TypeExperience::Carte => Experience::Carte {
                tirage: self.tirage,
            },
        }
    }

    /// Requête de l’écran simulateur (bornes déjà appliquées).
    pub fn requete_simulation(&self) -> RequeteCalcul {
        RequeteCalcul::Simulation(ConfigSimulation {
            experience: self.experience(),
            essais: self.essais,
            graine: self.graine_fixe.then_some(self.graine),
        })
    }

    /* ------------------------ Dépôt des résultats ------------------------ */

    /// Réponse du noyau pour l’écran calculatrice.
    /// Une réponse d’un autre type est une faute : affichée comme telle, l’ancien résultat est coupé.
    pub fn deposer_calcul(&mut self, reponse: Resultat<Reponse>) {
        match reponse {
            Ok(Reponse::Evaluation(e)) => self.set_evaluation(e),
            Ok(Reponse::Simulation(_)) => self.set_erreur_calc(&ErreurCalcul::Inattendue {
                cause: "réponse de simulation reçue pour un calcul".into(),
            }),
            Err(e) => self.set_erreur_calc(&e),
        }
    }

    /// Réponse du noyau pour l’écran simulateur.
    pub fn deposer_simulation(&mut self, reponse: Resultat<Reponse>) {
        match reponse {
            Ok(Reponse::Simulation(s)) => self.set_simulation(s),
            Ok(Reponse::Evaluation(_)) => self.set_erreur_simu(&ErreurCalcul::Inattendue {
                cause: "réponse de calcul reçue pour une simulation".into(),
            }),
            Err(e) => self.set_erreur_simu(&e),
        }
    }

    pub fn set_evaluation(&mut self, e: Evaluation) {
        self.message_calc = None;
        self.evaluation = Some(e);
    }

    /// Erreur : on coupe le résultat (pas de résultat périmé sous un message d’erreur).
    pub fn set_erreur_calc(&mut self, e: &ErreurCalcul) {
        self.evaluation = None;
        self.message_calc = Some(Message::from(e));
    }

    pub fn set_simulation(&mut self, s: ResultatSimulation) {
        self.message_simu = None;
        self.simulation = Some(s);
    }

    pub fn set_erreur_simu(&mut self, e: &ErreurCalcul) {
        self.simulation = None;
        self.message_simu = Some(Message::from(e));
    }

    /// Changer d’opération invalide le résultat affiché.
    pub fn set_choix(&mut self, choix: Choix) {
        if self.choix != choix {
            self.choix = choix;
            self.clear_calc();
        }
    }

    pub fn clear_calc(&mut self) {
        self.evaluation = None;
        self.message_calc = None;
    }

    pub fn clear_simu(&mut self) {
        self.simulation = None;
        self.message_simu = None;
    }

    /* ------------------------ Garde-fous ------------------------ */

    pub fn set_essais(&mut self, essais: usize) {
        self.essais = essais.clamp(ESSAIS_MIN, ESSAIS_MAX);
    }

    pub fn set_tirage(&mut self, tirage: usize) {
        self.tirage = tirage.clamp(TIRAGE_MIN, TIRAGE_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valeurs_par_defaut() {
        let app = AppCalc::default();
        assert_eq!(app.coefficients, "1, 0, 0");
        assert_eq!(app.x, 1.0);
        assert_eq!(app.essais, ESSAIS_DEFAUT);
        assert_eq!(app.tirage, 1);
        assert!(app.evaluation.is_none());
    }

    #[test]
    fn bornes_appliquees() {
        let mut app = AppCalc::default();
        app.set_essais(5);
        assert_eq!(app.essais, ESSAIS_MIN);
        app.set_essais(10_000_000);
        assert_eq!(app.essais, ESSAIS_MAX);
        app.set_tirage(0);
        assert_eq!(app.tirage, TIRAGE_MIN);
        app.set_tirage(9);
        assert_eq!(app.tirage, TIRAGE_MAX);
    }

    #[test]
    fn erreur_efface_le_resultat() {
        let mut app = AppCalc::default();
        app.set_evaluation(Evaluation {
            valeur: 1.0,
            equation: "1 + 0".into(),
        });
        app.set_erreur_calc(&ErreurCalcul::DivisionParZero);
        assert!(app.evaluation.is_none());
        let m = app.message_calc.as_ref().unwrap();
        assert!(!m.avertissement);

        app.set_erreur_calc(&ErreurCalcul::EntreeVide);
        assert!(app.message_calc.as_ref().unwrap().avertissement);
    }

    #[test]
    fn reponse_d_un_autre_type_efface_le_resultat() {
        let mut app = AppCalc::default();
        app.set_evaluation(Evaluation {
            valeur: 4.0,
            equation: "2 + 2".into(),
        });
        let simu = ResultatSimulation {
            experience: Experience::De,
            essais: 0,
            frequences: Default::default(),
        };
        app.deposer_calcul(Ok(Reponse::Simulation(simu.clone())));
        assert!(app.evaluation.is_none());
        assert!(matches!(&app.message_calc, Some(m) if !m.avertissement));

        app.set_simulation(simu);
        app.deposer_simulation(Ok(Reponse::Evaluation(Evaluation {
            valeur: 1.0,
            equation: "1".into(),
        })));
        assert!(app.simulation.is_none());
        assert!(app.message_simu.is_some());
    }

    #[test]
    fn reponse_attendue_deposee() {
        let mut app = AppCalc::default();
        app.set_erreur_calc(&ErreurCalcul::DivisionParZero);
        app.deposer_calcul(Ok(Reponse::Evaluation(Evaluation {
            valeur: 3.0,
            equation: "1 + 2".into(),
        })));
        assert!(app.message_calc.is_none());
        assert_eq!(app.evaluation.as_ref().map(|e| e.valeur), Some(3.0));

        app.deposer_simulation(Err(ErreurCalcul::Inattendue { cause: "x".into() }));
        assert!(app.simulation.is_none());
        assert!(app.message_simu.is_some());
    }

    #[test]
    fn requetes_construites_depuis_l_etat() {
        let mut app = AppCalc::default();
        app.set_choix(Choix::Polynome);
        app.x = 2.0;
        assert_eq!(
            app.requete_calcul(),
            RequeteCalcul::Polynome {
                coefficients: "1, 0, 0".into(),
                x: 2.0
            }
        );

        app.type_experience = TypeExperience::Carte;
        app.set_tirage(3);
        app.graine_fixe = true;
        app.graine = 9;
        match app.requete_simulation() {
            RequeteCalcul::Simulation(c) => {
                assert_eq!(c.experience, Experience::Carte { tirage: 3 });
                assert_eq!(c.graine, Some(9));
            }
            autre => panic!("requête inattendue {autre:?}"),
        }
    }
}
