//! Noyau de calcul (sans UI)
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées (division par zéro, domaine log, lecture, vide, imprévu)
//! - nombre.rs     : affichage des flottants dans les équations
//! - arith.rs      : 7 opérations binaires + équation
//! - polynome.rs   : lecture des coefficients, Horner, texte canonique
//! - simulation.rs : dé / pièce / cartes + table des fréquences
//!
//! Chaque appel est indépendant : pas d’état global, pas de cache.

pub mod arith;
pub mod erreur;
pub mod nombre;
pub mod polynome;
pub mod simulation;

#[cfg(test)]
mod tests_proprietes;

use std::panic::{self, AssertUnwindSafe};

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use arith::Operation;
use erreur::{ErreurCalcul, Resultat};
use simulation::{Experience, TableFrequences};

/// Valeur + équation affichable, produites à chaque appel.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub equation: String,
}

/// Paramètres d’une simulation.
///
/// `graine` : Some => exécution reproductible ; None => entropie fraîche à chaque appel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigSimulation {
    pub experience: Experience,
    pub essais: usize,
    pub graine: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultatSimulation {
    pub experience: Experience,
    pub essais: usize,
    pub frequences: TableFrequences,
}

/// Une action utilisateur = une requête.
#[derive(Clone, Debug, PartialEq)]
pub enum RequeteCalcul {
    Arith { op: Operation, a: f64, b: f64 },
    Polynome { coefficients: String, x: f64 },
    Simulation(ConfigSimulation),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Reponse {
    Evaluation(Evaluation),
    Simulation(ResultatSimulation),
}

/// API publique : traite une requête.
///
/// Frontière du noyau : une panique pendant le calcul devient `ErreurCalcul::Inattendue`
/// (cause jointe) au lieu d’arrêter l’application.
/// Natif seulement : en wasm32 une panique interrompt le module (pas de déroulement).
pub fn traiter(requete: &RequeteCalcul) -> Resultat<Reponse> {
    tracing::debug!(?requete, "requête");

    let issue = panic::catch_unwind(AssertUnwindSafe(|| executer(requete)))
        .unwrap_or_else(|charge| {
            let cause = if let Some(s) = charge.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = charge.downcast_ref::<String>() {
                s.clone()
            } else {
                "panique sans message".to_string()
            };
            Err(ErreurCalcul::Inattendue { cause })
        });

    match &issue {
        Ok(_) => {}
        Err(e @ ErreurCalcul::Inattendue { .. }) => tracing::error!(erreur = %e, "faute imprévue"),
        Err(e) => tracing::warn!(erreur = %e, "entrée refusée"),
    }

    issue
}

fn executer(requete: &RequeteCalcul) -> Resultat<Reponse> {
    match requete {
        RequeteCalcul::Arith { op, a, b } => arith::evaluer(*op, *a, *b).map(Reponse::Evaluation),
        RequeteCalcul::Polynome { coefficients, x } => {
            polynome::evaluer(coefficients, *x).map(Reponse::Evaluation)
        }
        RequeteCalcul::Simulation(config) => Ok(Reponse::Simulation(lancer_simulation(config))),
    }
}

/// Simulation + agrégation ; le lot brut n’est pas conservé.
pub fn lancer_simulation(config: &ConfigSimulation) -> ResultatSimulation {
    let mut rng = match config.graine {
        Some(g) => ChaCha20Rng::seed_from_u64(g),
        None => ChaCha20Rng::from_entropy(),
    };

    let lot = simulation::simuler(config.experience, config.essais, &mut rng);
    let frequences = simulation::agreger(&lot);

    tracing::info!(
        experience = config.experience.libelle(),
        essais = config.essais,
        issues_distinctes = frequences.len(),
        "simulation terminée"
    );

    ResultatSimulation {
        experience: config.experience,
        essais: config.essais,
        frequences,
    }
}
