// src/noyau/erreur.rs

use thiserror::Error;

/// Résultat du noyau.
pub type Resultat<T> = std::result::Result<T, ErreurCalcul>;

/// Erreurs du noyau (toutes terminales pour l’appel en cours : pas de reprise).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    /// Division ou modulo avec un second opérande nul.
    #[error("division par zéro impossible")]
    DivisionParZero,

    /// Domaine du logarithme (argument ≤ 0, base ≤ 0 ou base = 1).
    #[error("argument invalide : {0}")]
    ArgumentInvalide(String),

    /// Jeton non numérique dans la liste des coefficients.
    #[error("coefficient non numérique : '{jeton}' (séparer les nombres par des virgules)")]
    Analyse { jeton: String },

    /// Aucun coefficient après lecture.
    #[error("veuillez saisir au moins un coefficient")]
    EntreeVide,

    /// Faute imprévue attrapée à la frontière du noyau.
    #[error("erreur inattendue : {cause}")]
    Inattendue { cause: String },
}

impl ErreurCalcul {
    /// Niveau “avertissement” (affiché autrement), mais bloque l’évaluation comme une erreur.
    pub fn est_avertissement(&self) -> bool {
        matches!(self, ErreurCalcul::EntreeVide)
    }
}
