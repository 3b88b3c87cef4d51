// src/noyau/simulation.rs
//
// Moteur de simulation : dé, pièce, tirage de cartes.
//
// Contrats :
// - essais indépendants (tirages avec remise d’un essai à l’autre)
// - cartes : dans UN essai, `tirage` cartes distinctes (sans remise) ;
//   chaque essai repart d’un paquet complet de 52 cartes (aucun épuisement entre essais)
// - pas de validation ici : bornes garanties par l’appelant (ESSAIS_*, TIRAGE_*)

use std::collections::HashMap;
use std::fmt;

use rand::seq::index;
use rand::Rng;

/// Nombre d’essais : bornes conseillées + défaut UI.
pub const ESSAIS_MIN: usize = 100;
pub const ESSAIS_MAX: usize = 100_000;
pub const ESSAIS_DEFAUT: usize = 1000;

/// Cartes tirées par essai.
pub const TIRAGE_MIN: usize = 1;
pub const TIRAGE_MAX: usize = 5;

/* ------------------------ Paquet ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Couleur {
    Pique,
    Coeur,
    Carreau,
    Trefle,
}

impl Couleur {
    pub const TOUTES: [Couleur; 4] = [Couleur::Pique, Couleur::Coeur, Couleur::Carreau, Couleur::Trefle];

    fn symbole(self) -> &'static str {
        match self {
            Couleur::Pique => "♠",
            Couleur::Coeur => "♥",
            Couleur::Carreau => "♦",
            Couleur::Trefle => "♣",
        }
    }
}

/// Rang 1..=13 (1 = As, 11 = Valet, 12 = Dame, 13 = Roi).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rang(u8);

impl Rang {
    pub fn tous() -> impl Iterator<Item = Rang> {
        (1..=13).map(Rang)
    }
}

impl fmt::Display for Rang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("A"),
            11 => f.write_str("J"),
            12 => f.write_str("Q"),
            13 => f.write_str("K"),
            n => write!(f, "{n}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Carte {
    pub rang: Rang,
    pub couleur: Couleur,
}

impl fmt::Display for Carte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rang, self.couleur.symbole())
    }
}

pub const TAILLE_PAQUET: usize = 52;

/// Paquet neuf (4 couleurs × 13 rangs), ordre fixe.
pub fn paquet_neuf() -> Vec<Carte> {
    let paquet: Vec<Carte> = Couleur::TOUTES
        .iter()
        .flat_map(|&couleur| Rang::tous().map(move |rang| Carte { rang, couleur }))
        .collect();
    debug_assert_eq!(paquet.len(), TAILLE_PAQUET);
    paquet
}

/// Un essai : `tirage` cartes distinctes du paquet (non modifié), dans l’ordre du tirage.
pub fn tirer_cartes<R: Rng + ?Sized>(paquet: &[Carte], tirage: usize, rng: &mut R) -> Vec<Carte> {
    index::sample(rng, paquet.len(), tirage)
        .into_iter()
        .map(|i| paquet[i])
        .collect()
}

/* ------------------------ Expériences ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Experience {
    De,
    Piece,
    Carte { tirage: usize },
}

impl Experience {
    pub fn libelle(self) -> &'static str {
        match self {
            Experience::De => "Dé à 6 faces",
            Experience::Piece => "Pile ou face",
            Experience::Carte { .. } => "Tirage de cartes",
        }
    }

    /// Espace complet des issues, dans l’ordre naturel (affichage).
    pub fn etiquettes(self) -> Vec<String> {
        match self {
            Experience::De => (1..=6).map(|f| f.to_string()).collect(),
            Experience::Piece => vec![FACE.to_string(), PILE.to_string()],
            Experience::Carte { tirage: 1 } => paquet_neuf().iter().map(|c| c.to_string()).collect(),
            Experience::Carte { .. } => Rang::tous().map(|r| r.to_string()).collect(),
        }
    }
}

pub const FACE: &str = "Face";
pub const PILE: &str = "Pile";

/// Issues d’une exécution, dans l’ordre des essais.
#[derive(Clone, Debug, Default)]
pub struct LotEssais {
    pub issues: Vec<String>,
}

/// Lance `essais` essais indépendants.
///
/// Cartes : tirage == 1 => carte complète ("10♥") ; tirage > 1 => rang de la
/// première carte tirée seulement ("10"), les autres servent juste au “sans remise”.
pub fn simuler<R: Rng + ?Sized>(experience: Experience, essais: usize, rng: &mut R) -> LotEssais {
    let issues = match experience {
        Experience::De => (0..essais).map(|_| rng.gen_range(1..=6u8).to_string()).collect(),
        Experience::Piece => (0..essais)
            .map(|_| (if rng.gen_bool(0.5) { FACE } else { PILE }).to_string())
            .collect(),
        Experience::Carte { tirage } => {
            let paquet = paquet_neuf();
            (0..essais)
                .map(|_| {
                    let main = tirer_cartes(&paquet, tirage, &mut *rng);
                    match main.first() {
                        Some(c) if tirage == 1 => c.to_string(),
                        Some(c) => c.rang.to_string(),
                        None => String::new(),
                    }
                })
                .collect()
        }
    };
    LotEssais { issues }
}

/* ------------------------ Fréquences ------------------------ */

/// Issue -> nombre d’occurrences. Seules les issues observées sont présentes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableFrequences {
    comptes: HashMap<String, usize>,
}

impl TableFrequences {
    pub fn get(&self, issue: &str) -> Option<usize> {
        self.comptes.get(issue).copied()
    }

    pub fn len(&self) -> usize {
        self.comptes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comptes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.comptes.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Somme des comptes (= nombre d’essais agrégés).
    pub fn total(&self) -> usize {
        self.comptes.values().sum()
    }

    pub fn proportion(&self, issue: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(issue).unwrap_or(0) as f64 / total as f64
    }

    /// Entrées observées, dans l’ordre de `etiquettes` (absentes sautées).
    pub fn dans_l_ordre(&self, etiquettes: &[String]) -> Vec<(String, usize)> {
        etiquettes
            .iter()
            .filter_map(|e| self.get(e).map(|n| (e.clone(), n)))
            .collect()
    }
}

/// Compte les issues d’un lot.
pub fn agreger(lot: &LotEssais) -> TableFrequences {
    let mut comptes: HashMap<String, usize> = HashMap::new();
    for issue in &lot.issues {
        *comptes.entry(issue.clone()).or_insert(0) += 1;
    }
    TableFrequences { comptes }
}
