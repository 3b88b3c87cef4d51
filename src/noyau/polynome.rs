// src/noyau/polynome.rs
//
// Évaluateur polynomial.
// - lecture : "3, -2, 1" -> [3, -2, 1] (degré le plus haut en premier)
// - valeur  : Horner
// - texte   : "3x^2 - 2x + 1" (purement cosmétique, séparé du calcul)

use super::erreur::{ErreurCalcul, Resultat};
use super::nombre::format_nombre;
use super::Evaluation;

/// Lit une liste de coefficients séparés par des virgules.
///
/// Jetons vides ignorés (",," ou virgule finale). Aucun coefficient => `EntreeVide`.
pub fn lire_coefficients(texte: &str) -> Resultat<Vec<f64>> {
    let mut coeffs = Vec::new();

    for brut in texte.split(',') {
        let jeton = brut.trim();
        if jeton.is_empty() {
            continue;
        }
        let c = jeton.parse::<f64>().map_err(|_| ErreurCalcul::Analyse {
            jeton: jeton.to_string(),
        })?;
        coeffs.push(c);
    }

    if coeffs.is_empty() {
        return Err(ErreurCalcul::EntreeVide);
    }
    Ok(coeffs)
}

/// Horner : acc = acc·x + c, acc initial = 0.
pub fn evaluer_horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Texte canonique du polynôme.
///
/// - termes nuls omis ; tout nul => "0"
/// - coefficient 1 omis si degré ≥ 1 (x, x^2), gardé pour la constante
/// - premier terme sans "+", négatif => "-"
pub fn format_polynome(coeffs: &[f64]) -> String {
    let degre = coeffs.len().saturating_sub(1);
    let mut out = String::new();

    for (i, &c) in coeffs.iter().enumerate() {
        if c == 0.0 {
            continue;
        }
        let d = degre - i;
        let abs_c = c.abs();

        // signe
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else if c < 0.0 {
            out.push_str(" - ");
        } else {
            out.push_str(" + ");
        }

        // |coefficient|
        if !(abs_c == 1.0 && d >= 1) {
            out.push_str(&format_nombre(abs_c));
        }

        // puissance de x
        match d {
            0 => {}
            1 => out.push('x'),
            _ => {
                out.push_str("x^");
                out.push_str(&d.to_string());
            }
        }
    }

    if out.is_empty() {
        "0".to_string()
    } else {
        out
    }
}

/// Pipeline complet : lecture -> Horner -> "P(x) = …".
pub fn evaluer(texte: &str, x: f64) -> Resultat<Evaluation> {
    let coeffs = lire_coefficients(texte)?;
    let valeur = evaluer_horner(&coeffs, x);
    let equation = format!("P({}) = {}", format_nombre(x), format_polynome(&coeffs));
    Ok(Evaluation { valeur, equation })
}
