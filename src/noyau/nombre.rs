// src/noyau/nombre.rs
//
// Affichage des flottants dans les équations (pur, sans effet sur les valeurs).

/// 3.0 -> "3", 2.5 -> "2.5", NaN -> "NaN", ±inf -> "∞" / "-∞".
/// Très grand ou très petit : notation scientifique (1e20, 2.5e-7).
pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }
    let abs = v.abs();
    if !(1e-6..1e15).contains(&abs) {
        return format!("{v:e}");
    }
    format!("{v}")
}

/// Opérande dans une forme infixe : négatif => parenthèses (3 - (-2)).
pub fn format_operande(v: f64) -> String {
    let s = format_nombre(v);
    if s.starts_with('-') {
        format!("({s})")
    } else {
        s
    }
}
