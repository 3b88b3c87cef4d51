// src/noyau/arith.rs
//
// Évaluateur arithmétique : (opération, a, b) -> valeur + équation.
// Fonctions pures. Le format de l’équation n’influence jamais la valeur.

use super::erreur::{ErreurCalcul, Resultat};
use super::nombre::format_operande;
use super::Evaluation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Soustraction,
    Multiplication,
    Division,
    Modulo,
    Puissance,
    /// a = argument, b = base
    Logarithme,
}

impl Operation {
    /// Ordre d’affichage (menu).
    pub const TOUTES: [Operation; 7] = [
        Operation::Addition,
        Operation::Soustraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Modulo,
        Operation::Puissance,
        Operation::Logarithme,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            Operation::Addition => "Addition (+)",
            Operation::Soustraction => "Soustraction (-)",
            Operation::Multiplication => "Multiplication (×)",
            Operation::Division => "Division (÷)",
            Operation::Modulo => "Modulo (mod)",
            Operation::Puissance => "Puissance (^)",
            Operation::Logarithme => "Logarithme (log)",
        }
    }
}

/// Évalue `a op b`.
///
/// - division / modulo : `DivisionParZero` si b == 0.0 (égalité exacte, pas d’epsilon)
/// - modulo : reste “plancher” (signe du diviseur), pas le `%` tronqué de Rust
/// - puissance : NaN / ∞ transmis tels quels
/// - log : argument > 0, base > 0 et ≠ 1
pub fn evaluer(op: Operation, a: f64, b: f64) -> Resultat<Evaluation> {
    let valeur = match op {
        Operation::Addition => a + b,
        Operation::Soustraction => a - b,
        Operation::Multiplication => a * b,
        Operation::Division => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operation::Modulo => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            modulo_plancher(a, b)
        }
        Operation::Puissance => a.powf(b),
        Operation::Logarithme => {
            if a <= 0.0 {
                return Err(ErreurCalcul::ArgumentInvalide(
                    "l’argument du logarithme doit être strictement positif".into(),
                ));
            }
            if b <= 0.0 || b == 1.0 {
                return Err(ErreurCalcul::ArgumentInvalide(
                    "la base doit être strictement positive et différente de 1".into(),
                ));
            }
            a.ln() / b.ln()
        }
    };

    Ok(Evaluation {
        valeur,
        equation: format_equation(op, a, b),
    })
}

/// Reste du signe du diviseur : a - b·⌊a/b⌋.
///
/// `%` de Rust tronque (signe du dividende) : on recale quand les signes diffèrent.
pub fn modulo_plancher(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r != 0.0 && (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Forme affichable de l’équation (sans le résultat).
pub fn format_equation(op: Operation, a: f64, b: f64) -> String {
    let sa = format_operande(a);
    let sb = format_operande(b);
    match op {
        Operation::Addition => format!("{sa} + {sb}"),
        Operation::Soustraction => format!("{sa} - {sb}"),
        Operation::Multiplication => format!("{sa} × {sb}"),
        Operation::Division => format!("{sa} ÷ {sb}"),
        Operation::Modulo => format!("{sa} mod {sb}"),
        Operation::Puissance => format!("{sa}^{sb}"),
        Operation::Logarithme => format!("log_{sb}({sa})"),
    }
}
