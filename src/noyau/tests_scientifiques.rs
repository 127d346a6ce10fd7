//! Tests scientifiques (campagne) : couche scientifique vue depuis le pavé.
//!
//! But : vérifier les invariants visibles par l’utilisateur.
//! - degrés partout pour sin/cos/tan
//! - jamais "NaN" / "inf" à l’écran : hors domaine => "Error"
//! - une fonction termine le calcul (Evalue) et se chaîne comme un résultat

use super::format::MARQUEUR_ERREUR;
use super::saisie::{apply_token, coller_texte, EtatSaisie, Phase};
use super::touches::{FonctionSci, Touche};

/// Tape une suite de libellés de touches séparés par des espaces : "9 0 sin".
fn taper(libelles: &str) -> EtatSaisie {
    libelles.split_whitespace().fold(EtatSaisie::default(), |e, l| {
        let t: Touche = l
            .parse()
            .unwrap_or_else(|err| panic!("libellé {l:?} : {err}"));
        apply_token(e, t)
    })
}

fn assert_affiche(libelles: &str, attendu: &str) {
    let e = taper(libelles);
    assert_eq!(e.affichage, attendu, "touches={libelles:?}");
}

fn assert_error(libelles: &str) {
    let e = taper(libelles);
    assert_eq!(e.affichage, MARQUEUR_ERREUR, "touches={libelles:?}");
    assert_eq!(e.phase(), Phase::Erreur);
    assert!(e.expression.is_empty());
}

/* ------------------------ Angles remarquables (degrés) ------------------------ */

#[test]
fn sci_angles_remarquables() {
    assert_affiche("3 0 sin", "0.5");
    assert_affiche("9 0 sin", "1");
    assert_affiche("1 8 0 sin", "0");
    assert_affiche("6 0 cos", "0.5");
    assert_affiche("9 0 cos", "0");
    assert_affiche("4 5 tan", "1");
    assert_affiche("0 tan", "0");
}

#[test]
fn sci_angles_negatifs() {
    // -30 via un résultat négatif
    assert_affiche("- 3 0 = sin", "-0.5");
    assert_affiche("- 6 0 = cos", "0.5");
}

/* ------------------------ Logarithmes + racine ------------------------ */

#[test]
fn sci_logarithmes() {
    assert_affiche("1 0 0 0 log", "3");
    assert_affiche("1 ln", "0");
    assert_affiche("2 √", "1.4142135624");
}

#[test]
fn sci_hors_domaine() {
    assert_error("0 log");
    assert_error("0 ln");
    assert_error("- 4 = log");
    assert_error("- 1 = √");
}

#[test]
fn sci_tan_aux_poles() {
    assert_error("9 0 tan");
    assert_error("2 7 0 tan");
    assert_error("- 9 0 = tan");
    // juste à côté du pôle : un nombre, pas une erreur
    assert_affiche("8 9 tan", "57.2899616308");
}

/* ------------------------ Chaînage ------------------------ */

#[test]
fn sci_fonction_puis_operateur() {
    // √9 = 3, puis ×2 = 6
    assert_affiche("9 √ × 2 =", "6");
}

#[test]
fn sci_fonction_puis_chiffre_repart_de_zero() {
    let e = taper("9 √ 4");
    assert_eq!(e.affichage, "4");
    assert_eq!(e.expression, "4");
}

#[test]
fn sci_fonctions_en_cascade() {
    // √(√81) = 3
    assert_affiche("8 1 √ √", "3");
    // log(π) ≈ 0.4971498727
    assert_affiche("π log", "0.4971498727");
}

#[test]
fn sci_cascade_sur_valeur_complete() {
    // √2 × √2 doit redonner 2 : on enchaîne sur la valeur complète,
    // pas sur l’affichage arrondi 1.4142135624 (qui donnerait 2.0000000001)
    let racine = taper("2 √");
    assert_eq!(racine.expression.parse::<f64>().unwrap(), 2f64.sqrt());

    let e = coller_texte(&taper("2 √ ×"), &racine.expression).unwrap();
    let e = apply_token(e, Touche::EGAL);
    assert_eq!(e.affichage, "2");
}

#[test]
fn sci_apres_error_seul_pi_agit() {
    for f in FonctionSci::TOUTES {
        let e = apply_token(taper("5 ÷ 0 ="), Touche::Fonction(f));
        if f == FonctionSci::Pi {
            assert_eq!(e.affichage, "3.1415926536");
        } else {
            assert_eq!(e.affichage, MARQUEUR_ERREUR, "f={f:?}");
        }
    }
}
