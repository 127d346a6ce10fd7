// src/noyau/format.rs
//
// Rendu des résultats.
// - formater_affichage : précision fixe (décimales) pour l’écran
// - formater_exact     : rendu aller-retour sans perte, pour l’expression
//   (le calcul enchaîné repart de la valeur complète, pas de l’arrondi)

/// Marqueur d’erreur affiché à la place d’un nombre.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Au-delà, l’affichage passe en notation exponentielle (1.5e20).
const SEUIL_EXPONENTIEL: f64 = 1e16;

/// Rendu écran : arrondi à `decimales` chiffres après la virgule,
/// zéros finaux retirés, "-0" normalisé en "0".
///
/// Appelant : la valeur doit être finie (sinon on rend le marqueur d’erreur).
pub fn formater_affichage(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return MARQUEUR_ERREUR.to_string();
    }

    if v.abs() >= SEUIL_EXPONENTIEL {
        let s = format!("{v:.decimales$e}");
        return match s.split_once('e') {
            Some((mantisse, exposant)) => format!("{}e{exposant}", retirer_zeros(mantisse)),
            None => s,
        };
    }

    let s = format!("{v:.decimales$}");
    let s = retirer_zeros(&s);
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Rendu sans perte (plus courte écriture qui relit le même f64, jamais d’exposant).
pub fn formater_exact(v: f64) -> String {
    if v == 0.0 {
        // couvre aussi -0.0
        return "0".to_string();
    }
    format!("{v}")
}

/// "2.5000" -> "2.5" ; "3.000" -> "3" ; "10" -> "10"
fn retirer_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
