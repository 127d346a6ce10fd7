//! Tests fuzz safe : robustesse + invariants sur des suites de touches aléatoires.
//!
//! But : marteler l’accumulateur sans brûler la machine.
//! - proptest (graines reproductibles, réduction automatique des contre-exemples)
//! - longueurs bornées
//! - invariants : pas d’opérateurs empilés, jamais NaN/inf à l’écran, C idempotent

use proptest::prelude::*;

use super::erreur::ErreurCalcul;
use super::eval::evaluate;
use super::format::MARQUEUR_ERREUR;
use super::saisie::{apply_token, EtatSaisie, Phase};
use super::touches::{Action, FonctionSci, Operateur, Touche};

/* ------------------------ Stratégies ------------------------ */

fn touche() -> impl Strategy<Value = Touche> {
    prop_oneof![
        6 => (0u8..=9).prop_map(Touche::Chiffre),
        1 => Just(Touche::Virgule),
        3 => prop::sample::select(Operateur::TOUS.to_vec()).prop_map(Touche::Operateur),
        2 => prop::sample::select(vec![Action::Effacer, Action::Retour, Action::Egal])
            .prop_map(Touche::Action),
        1 => prop::sample::select(FonctionSci::TOUTES.to_vec()).prop_map(Touche::Fonction),
    ]
}

fn operateur_arith() -> impl Strategy<Value = Operateur> {
    prop::sample::select(vec![
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ])
}

/* ------------------------ Helpers ------------------------ */

fn appliquer(touches: &[Touche]) -> EtatSaisie {
    touches
        .iter()
        .fold(EtatSaisie::default(), |e, t| apply_token(e, *t))
}

fn est_operateur(c: char) -> bool {
    Operateur::depuis_symbole(c).is_some()
}

/// Référence : × ÷ d’abord (gauche à droite), puis + - (gauche à droite).
fn reference(premier: i32, suite: &[(Operateur, i32)]) -> f64 {
    let mut termes: Vec<(f64, f64)> = Vec::new(); // (signe, terme)
    let mut signe = 1.0;
    let mut terme = f64::from(premier);

    for &(op, n) in suite {
        let n = f64::from(n);
        match op {
            Operateur::Fois => terme *= n,
            Operateur::Divise => terme /= n,
            Operateur::Plus | Operateur::Moins => {
                termes.push((signe, terme));
                signe = if op == Operateur::Plus { 1.0 } else { -1.0 };
                terme = n;
            }
            Operateur::Pourcent => unreachable!(),
        }
    }
    termes.push((signe, terme));

    let mut acc = termes[0].1;
    for &(s, t) in &termes[1..] {
        if s > 0.0 {
            acc += t;
        } else {
            acc -= t;
        }
    }
    acc
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fuzz_chiffres_depuis_zero(chiffres in prop::collection::vec(0u8..=9, 1..16)) {
        let touches: Vec<Touche> = chiffres.iter().map(|d| Touche::Chiffre(*d)).collect();
        let e = appliquer(&touches);

        let d: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let replie = d.trim_start_matches('0');
        let replie = if replie.is_empty() { "0" } else { replie };

        prop_assert_eq!(&e.expression, &d);
        prop_assert_eq!(e.affichage.as_str(), replie);
    }

    #[test]
    fn fuzz_jamais_deux_operateurs_consecutifs(touches in prop::collection::vec(touche(), 0..40)) {
        let mut e = EtatSaisie::default();
        for t in touches {
            e = apply_token(e, t);
            let chars: Vec<char> = e.expression.chars().collect();
            for paire in chars.windows(2) {
                prop_assert!(
                    !(est_operateur(paire[0]) && est_operateur(paire[1])),
                    "expression={:?}", e.expression
                );
            }
        }
    }

    #[test]
    fn fuzz_affichage_toujours_numerique_ou_error(touches in prop::collection::vec(touche(), 0..40)) {
        let mut e = EtatSaisie::default();
        for t in touches {
            e = apply_token(e, t);
            if e.phase() == Phase::Erreur {
                prop_assert!(e.expression.is_empty());
            } else {
                let v = e.affichage.parse::<f64>();
                prop_assert!(v.is_ok(), "affichage={:?}", e.affichage);
                prop_assert!(v.unwrap().is_finite());
            }
            prop_assert!(!e.affichage.contains("NaN") && !e.affichage.contains("inf"));
        }
    }

    #[test]
    fn fuzz_expression_bien_formee_en_saisie(touches in prop::collection::vec(touche(), 0..40)) {
        let mut e = EtatSaisie::default();
        for t in touches {
            e = apply_token(e, t);
            if e.phase() != Phase::Saisie {
                continue;
            }
            // seul l’opérande final peut manquer
            let corps = e.expression.trim_end_matches(est_operateur);
            if corps.is_empty() {
                continue;
            }
            let r = evaluate(corps);
            prop_assert!(
                !matches!(r, Err(ErreurCalcul::ExpressionMalformee(_))),
                "expression={:?} r={:?}", e.expression, r
            );
        }
    }

    #[test]
    fn fuzz_effacer_idempotent(touches in prop::collection::vec(touche(), 0..30)) {
        let une = apply_token(appliquer(&touches), Touche::EFFACER);
        let deux = apply_token(une.clone(), Touche::EFFACER);
        prop_assert_eq!(&une, &EtatSaisie::default());
        prop_assert_eq!(une, deux);
    }

    #[test]
    fn fuzz_precedence_standard(
        premier in 1i32..1000,
        suite in prop::collection::vec((operateur_arith(), 1i32..1000), 0..8),
    ) {
        let mut expr = premier.to_string();
        for (op, n) in &suite {
            expr.push(op.symbole());
            expr.push_str(&n.to_string());
        }

        let v = evaluate(&expr);
        prop_assert!(v.is_ok(), "expr={:?} err={:?}", expr, v);
        prop_assert_eq!(v.unwrap(), reference(premier, &suite), "expr={:?}", expr);
    }

    #[test]
    fn fuzz_evaluate_ne_panique_pas(s in "[0-9.+×÷%*/ a-z()-]{0,24}") {
        match evaluate(&s) {
            Ok(v) => prop_assert!(v.is_finite()),
            Err(_) => {}
        }
    }

    #[test]
    fn fuzz_error_puis_chiffre(d in 0u8..=9) {
        let e = appliquer(&[
            Touche::Chiffre(5),
            Touche::Operateur(Operateur::Divise),
            Touche::Chiffre(0),
            Touche::EGAL,
        ]);
        prop_assert_eq!(e.affichage.as_str(), MARQUEUR_ERREUR);

        let e = apply_token(e, Touche::Chiffre(d));
        prop_assert_eq!(e.phase(), Phase::Saisie);
        prop_assert_eq!(e.expression, d.to_string());
    }
}
