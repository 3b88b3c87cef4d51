//! Tests de propriétés (proptest) : invariants du noyau.
//!
//! - division : a/b exact pour b ≠ 0 ; division et modulo par 0 toujours refusés
//! - log : refus ⇔ a ≤ 0 ou b ≤ 0 ou b = 1
//! - modulo : reste du signe du diviseur, |r| < |b|
//! - polynôme : Horner = somme naïve des puissances (tolérance)
//! - simulation : somme des fréquences = essais, issues dans l’espace attendu

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::arith::{evaluer, Operation};
use super::erreur::ErreurCalcul;
use super::polynome::{evaluer_horner, format_polynome, lire_coefficients};
use super::simulation::{agreger, paquet_neuf, simuler, tirer_cartes, Experience};

/* ------------------------ Stratégies ------------------------ */

fn nombre_fini() -> impl Strategy<Value = f64> {
    -1.0e6f64..1.0e6
}

fn non_nul() -> impl Strategy<Value = f64> {
    nombre_fini().prop_filter("b ≠ 0", |b| *b != 0.0)
}

fn experience() -> impl Strategy<Value = Experience> {
    prop_oneof![
        Just(Experience::De),
        Just(Experience::Piece),
        (1usize..=5).prop_map(|tirage| Experience::Carte { tirage }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /* ------------------------ Arithmétique ------------------------ */

    #[test]
    fn prop_division_exacte(a in nombre_fini(), b in non_nul()) {
        let e = evaluer(Operation::Division, a, b).unwrap();
        prop_assert_eq!(e.valeur, a / b);
    }

    #[test]
    fn prop_division_modulo_par_zero(a in any::<f64>()) {
        prop_assert_eq!(evaluer(Operation::Division, a, 0.0), Err(ErreurCalcul::DivisionParZero));
        prop_assert_eq!(evaluer(Operation::Modulo, a, 0.0), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn prop_modulo_signe_du_diviseur(a in nombre_fini(), b in non_nul()) {
        let r = evaluer(Operation::Modulo, a, b).unwrap().valeur;
        prop_assert!(r == 0.0 || (r < 0.0) == (b < 0.0), "a={} b={} r={}", a, b, r);
        prop_assert!(r.abs() <= b.abs(), "a={} b={} r={}", a, b, r);
    }

    #[test]
    fn prop_log_domaine(a in -10.0f64..10.0, b in prop_oneof![Just(1.0f64), Just(0.0f64), -10.0f64..10.0]) {
        let r = evaluer(Operation::Logarithme, a, b);
        let refuse = a <= 0.0 || b <= 0.0 || b == 1.0;
        match r {
            Err(ErreurCalcul::ArgumentInvalide(_)) => prop_assert!(refuse),
            Ok(e) => {
                prop_assert!(!refuse);
                let attendu = a.ln() / b.ln();
                prop_assert!((e.valeur - attendu).abs() <= 1e-9 * attendu.abs().max(1.0));
            }
            Err(autre) => prop_assert!(false, "erreur inattendue {:?}", autre),
        }
    }

    /* ------------------------ Polynôme ------------------------ */

    #[test]
    fn prop_horner_egal_somme_naive(
        coeffs in proptest::collection::vec(-10.0f64..10.0, 1..8),
        x in -3.0f64..3.0,
    ) {
        let n = coeffs.len();
        let naive: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi((n - 1 - i) as i32))
            .sum();
        let h = evaluer_horner(&coeffs, x);
        prop_assert!((h - naive).abs() <= 1e-6 * naive.abs().max(1.0), "h={} naive={}", h, naive);
    }

    #[test]
    fn prop_lecture_entiers(coeffs in proptest::collection::vec(-1000i32..1000, 1..10)) {
        let texte = coeffs.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ");
        let lus = lire_coefficients(&texte).unwrap();
        let attendus: Vec<f64> = coeffs.iter().map(|&c| c as f64).collect();
        prop_assert_eq!(lus, attendus);
    }

    #[test]
    fn prop_format_sans_signes_doubles(coeffs in proptest::collection::vec(-5i32..5, 1..8)) {
        let coeffs: Vec<f64> = coeffs.into_iter().map(f64::from).collect();
        let s = format_polynome(&coeffs);
        prop_assert!(!s.is_empty());
        prop_assert!(!s.starts_with('+'), "{}", s);
        prop_assert!(!s.contains("+ -") && !s.contains("- -"), "{}", s);
        if coeffs.iter().all(|&c| c == 0.0) {
            prop_assert_eq!(s, "0");
        }
    }

    /* ------------------------ Simulation ------------------------ */

    #[test]
    fn prop_frequences_somme_essais(exp in experience(), essais in 100usize..400, graine in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(graine);
        let t = agreger(&simuler(exp, essais, &mut rng));
        prop_assert_eq!(t.total(), essais);

        let espace: HashSet<String> = exp.etiquettes().into_iter().collect();
        for (issue, n) in t.iter() {
            prop_assert!(espace.contains(issue), "issue {} hors espace", issue);
            prop_assert!(n > 0);
        }
    }

    #[test]
    fn prop_cartes_distinctes_dans_un_essai(tirage in 1usize..=5, graine in any::<u64>()) {
        let paquet = paquet_neuf();
        let mut rng = ChaCha20Rng::seed_from_u64(graine);
        let main = tirer_cartes(&paquet, tirage, &mut rng);
        let uniques: HashSet<_> = main.iter().collect();
        prop_assert_eq!(uniques.len(), tirage);
    }
}
