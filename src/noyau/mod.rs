//! Noyau de la calculatrice (pur, sans UI)
//!
//! Organisation interne :
//! - touches.rs      : touches du pavé (Touche, Operateur, Action, FonctionSci)
//! - jetons.rs       : tokenisation de l’expression visible
//! - rpn.rs          : shunting-yard + évaluation sur pile
//! - eval.rs         : pipeline complet (evaluate)
//! - scientifique.rs : fonctions unaires sur l’affichage
//! - format.rs       : rendu écran / rendu exact
//! - saisie.rs       : accumulateur + machine à états (apply_token)
//! - erreur.rs       : taxonomie des erreurs

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;
pub mod scientifique;
pub mod touches;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{evaluate, evaluer_avec_demarche, Demarche, EvaluationResult};
pub use format::MARQUEUR_ERREUR;
pub use saisie::{apply_token, apply_token_with, coller_texte, EtatSaisie, Phase};
pub use scientifique::appliquer_fonction;
pub use touches::{Action, FonctionSci, Operateur, Touche};
