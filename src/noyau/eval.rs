//! Noyau : évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile f64 -> contrôle “fini”
//!
//! Grammaire fermée : nombres + opérateurs. Aucune chaîne n’est jamais exécutée
//! comme du code.

use tracing::debug;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Résultat d’évaluation : valeur finie, ou erreur typée.
pub type EvaluationResult = Result<f64, ErreurCalcul>;

/// Démarche affichable (panneau d’explication).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression (× ÷ % avant + -).
pub fn evaluate(expression: &str) -> EvaluationResult {
    evaluer_avec_demarche(expression).map(|(v, _d)| v)
}

/// Comme `evaluate`, avec jetons + RPN en texte.
pub fn evaluer_avec_demarche(expression: &str) -> Result<(f64, Demarche), ErreurCalcul> {
    let s = expression.trim();
    if s.is_empty() {
        return Err(ErreurCalcul::malformee("expression vide"));
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Valeur
    let v = eval_rpn(&rpn)?;
    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }

    debug!(expression = s, valeur = v, "expression évaluée");

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    Ok((v, d))
}
