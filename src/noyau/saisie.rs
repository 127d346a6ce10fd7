//! src/noyau/saisie.rs
//!
//! Accumulateur : touches -> (affichage, expression) + machine à états.
//!
//! États : Saisie -> Evalue (= ou fonction réussie) ; * -> Erreur (échec) ;
//! Erreur -> Saisie (C, ⌫, ou chiffre qui démarre une nouvelle expression).
//!
//! Contrats :
//! - fonction pure : `apply_token(etat, touche) -> etat` (aucun état partagé)
//! - `expression` n’a jamais deux opérateurs consécutifs
//! - en Saisie, `affichage` = opérande final de `expression` (zéros de tête repliés)
//! - aucune erreur ne sort d’ici : elle devient l’affichage "Error"

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::erreur::ErreurCalcul;
use super::eval::evaluate;
use super::format::{formater_affichage, formater_exact, MARQUEUR_ERREUR};
use super::scientifique::appliquer_fonction;
use super::touches::{Action, FonctionSci, Operateur, Touche};
use crate::config::Config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtatSaisie {
    /// Valeur visible (en cours d’édition, résultat, ou "Error")
    pub affichage: String,
    /// Suite gauche-droite des opérandes et opérateurs
    pub expression: String,
    /// true juste après = ou une fonction scientifique réussie
    pub vient_d_evaluer: bool,
    /// Calcul ayant produit le résultat courant ("3+4×2", "sin(30)") ; sert à l’historique.
    pub calcul_source: Option<String>,
}

impl Default for EtatSaisie {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            expression: String::new(),
            vient_d_evaluer: false,
            calcul_source: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Saisie,
    Evalue,
    Erreur,
}

impl EtatSaisie {
    pub fn phase(&self) -> Phase {
        if self.affichage == MARQUEUR_ERREUR {
            Phase::Erreur
        } else if self.vient_d_evaluer {
            Phase::Evalue
        } else {
            Phase::Saisie
        }
    }

    fn en_erreur(err: &ErreurCalcul) -> Self {
        debug!(error = %err, "évaluation refusée");
        Self {
            affichage: MARQUEUR_ERREUR.to_string(),
            ..Self::default()
        }
    }

    fn resultat(v: f64, source: String, config: &Config) -> Self {
        Self {
            affichage: formater_affichage(v, config.decimales),
            expression: formater_exact(v),
            vient_d_evaluer: true,
            calcul_source: Some(source),
        }
    }
}

/// API publique : applique une touche avec la configuration par défaut.
pub fn apply_token(etat: EtatSaisie, touche: Touche) -> EtatSaisie {
    apply_token_with(etat, touche, &Config::default())
}

/// API publique : applique une touche (configuration injectée).
pub fn apply_token_with(etat: EtatSaisie, touche: Touche, config: &Config) -> EtatSaisie {
    let avant = etat.phase();

    let suivant = match touche {
        Touche::Chiffre(d) if d <= 9 => saisir_caractere(etat, char::from(b'0' + d)),
        Touche::Chiffre(_) => etat,
        Touche::Virgule => saisir_caractere(etat, '.'),
        Touche::Operateur(op) => saisir_operateur(etat, op),
        Touche::Action(Action::Effacer) => EtatSaisie::default(),
        Touche::Action(Action::Retour) => retour(etat),
        Touche::Action(Action::Egal) => egal(etat, config),
        Touche::Fonction(f) => fonction(etat, f, config),
    };

    debug!(
        %touche,
        ?avant,
        apres = ?suivant.phase(),
        affichage = %suivant.affichage,
        expression = %suivant.expression,
        "touche appliquée"
    );
    suivant
}

/// Coller : le texte doit être un nombre fini, sinon l’état reste intact.
/// La valeur remplace l’opérande en cours (ou démarre une nouvelle expression).
pub fn coller_texte(etat: &EtatSaisie, texte: &str) -> Result<EtatSaisie, ErreurCalcul> {
    let t = texte.trim();
    let v = t
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ErreurCalcul::PressePapiers(t.to_string()))?;

    let mut e = match etat.phase() {
        Phase::Saisie => etat.clone(),
        Phase::Evalue | Phase::Erreur => EtatSaisie::default(),
    };

    let garde = e.expression.len() - operande_final(&e.expression).len();
    e.expression.truncate(garde);
    e.expression.push_str(&formater_exact(v));
    e.affichage = affichage_depuis(&e.expression);
    Ok(e)
}

/* ------------------------ Transitions ------------------------ */

fn saisir_caractere(etat: EtatSaisie, c: char) -> EtatSaisie {
    // Après = (ou Error) : un chiffre démarre une NOUVELLE expression
    let mut e = match etat.phase() {
        Phase::Saisie => etat,
        Phase::Evalue | Phase::Erreur => EtatSaisie::default(),
    };

    if c == '.' && e.affichage.contains('.') {
        return e;
    }
    // "." seul n’est pas un nombre : l’expression reçoit "0."
    if c == '.' && operande_final(&e.expression).is_empty() {
        e.expression.push('0');
    }

    if e.affichage == "0" && c != '.' {
        e.affichage = c.to_string();
    } else {
        e.affichage.push(c);
    }
    e.expression.push(c);
    e
}

fn saisir_operateur(etat: EtatSaisie, op: Operateur) -> EtatSaisie {
    let mut e = match etat.phase() {
        Phase::Erreur => return etat,
        // le résultat (valeur complète) devient le premier opérande
        Phase::Evalue => EtatSaisie {
            vient_d_evaluer: false,
            calcul_source: None,
            ..etat
        },
        Phase::Saisie => etat,
    };

    let finit_par_operateur = e
        .expression
        .chars()
        .last()
        .is_some_and(est_operateur);

    if finit_par_operateur {
        // "3+" puis × => "3×" (pas d’empilement)
        e.expression.pop();
    } else if e.expression.is_empty() {
        e.expression.push_str(&e.affichage);
    }

    e.expression.push(op.symbole());
    e.affichage = "0".to_string();
    e
}

fn retour(etat: EtatSaisie) -> EtatSaisie {
    let mut e = match etat.phase() {
        Phase::Erreur => return EtatSaisie::default(),
        Phase::Evalue => {
            // Rebase : le résultat affiché devient un opérande ordinaire
            if etat.affichage.contains('e') {
                return EtatSaisie::default();
            }
            EtatSaisie {
                expression: etat.affichage.clone(),
                vient_d_evaluer: false,
                calcul_source: None,
                ..etat
            }
        }
        Phase::Saisie => etat,
    };

    e.expression.pop();
    // un signe unaire orphelin ("-" , "3+-") part avec son nombre
    if let Some(avant) = e.expression.strip_suffix('-') {
        if avant.chars().last().map_or(true, est_operateur) {
            e.expression.pop();
        }
    }
    e.affichage = affichage_depuis(&e.expression);
    e
}

fn egal(etat: EtatSaisie, config: &Config) -> EtatSaisie {
    match etat.phase() {
        Phase::Erreur | Phase::Evalue => etat,
        Phase::Saisie => match evaluate(&etat.expression) {
            Ok(v) => EtatSaisie::resultat(v, etat.expression, config),
            Err(err) => EtatSaisie::en_erreur(&err),
        },
    }
}

fn fonction(etat: EtatSaisie, f: FonctionSci, config: &Config) -> EtatSaisie {
    if f == FonctionSci::Pi {
        return match appliquer_fonction(f, 0.0) {
            Ok(v) => EtatSaisie::resultat(v, f.libelle().to_string(), config),
            Err(err) => EtatSaisie::en_erreur(&err),
        };
    }

    // Après =, on repart de la valeur complète (pas de l’arrondi affiché)
    let argument = match etat.phase() {
        Phase::Erreur => return etat,
        Phase::Evalue => etat.expression.as_str(),
        Phase::Saisie => etat.affichage.as_str(),
    };

    let x = match argument.parse::<f64>() {
        Ok(x) => x,
        Err(_) => {
            return EtatSaisie::en_erreur(&ErreurCalcul::malformee(format!(
                "affichage non numérique {argument:?}"
            )))
        }
    };

    match appliquer_fonction(f, x) {
        Ok(v) => {
            let source = format!("{}({})", f.libelle(), etat.affichage);
            EtatSaisie::resultat(v, source, config)
        }
        Err(err) => EtatSaisie::en_erreur(&err),
    }
}

/* ------------------------ Outils ------------------------ */

fn est_operateur(c: char) -> bool {
    Operateur::depuis_symbole(c).is_some()
}

/// Opérande en fin d’expression, signe unaire compris ("3+-12.5" -> "-12.5").
fn operande_final(expression: &str) -> &str {
    let debut = expression
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map_or(expression.len(), |(i, _)| i);

    if debut < expression.len() {
        if let Some(avant) = expression[..debut].strip_suffix('-') {
            let signe_unaire = avant
                .chars()
                .last()
                .map_or(true, est_operateur);
            if signe_unaire {
                return &expression[debut - 1..];
            }
        }
    }

    &expression[debut..]
}

/// Affichage d’un opérande : "007" -> "7", "." -> "0.", "" -> "0".
fn affichage_depuis(expression: &str) -> String {
    let op = operande_final(expression);
    let (signe, corps) = match op.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", op),
    };

    let corps = corps.trim_start_matches('0');
    if corps.is_empty() {
        return "0".to_string();
    }
    if corps.starts_with('.') {
        return format!("{signe}0{corps}");
    }
    format!("{signe}{corps}")
}
