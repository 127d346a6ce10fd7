// src/noyau/scientifique.rs
//
// Couche scientifique : fonction unaire appliquée directement à la valeur affichée.
// - sin/cos/tan : argument en DEGRÉS (conversion en radians ici)
// - log : base 10 ; ln : népérien ; √ : racine principale
// - π : ignore l’argument
//
// Contrat : jamais de NaN/∞ en sortie. Hors domaine => HorsDomaine ;
// débordement => ResultatNonFini.

use std::f64::consts::PI;

use super::erreur::ErreurCalcul;
use super::eval::EvaluationResult;
use super::touches::FonctionSci;

pub fn appliquer_fonction(f: FonctionSci, x: f64) -> EvaluationResult {
    if f != FonctionSci::Pi && !x.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }

    let v = match f {
        FonctionSci::Sin => x.to_radians().sin(),
        FonctionSci::Cos => x.to_radians().cos(),
        FonctionSci::Tan => {
            // pôles : 90° + k·180°
            if (x % 180.0).abs() == 90.0 {
                return Err(ErreurCalcul::HorsDomaine("tan de 90° + k·180°"));
            }
            x.to_radians().tan()
        }
        FonctionSci::Log => {
            if x <= 0.0 {
                return Err(ErreurCalcul::HorsDomaine("log d’un nombre ≤ 0"));
            }
            x.log10()
        }
        FonctionSci::Ln => {
            if x <= 0.0 {
                return Err(ErreurCalcul::HorsDomaine("ln d’un nombre ≤ 0"));
            }
            x.ln()
        }
        FonctionSci::Racine => {
            if x < 0.0 {
                return Err(ErreurCalcul::HorsDomaine("√ d’un nombre négatif"));
            }
            x.sqrt()
        }
        FonctionSci::Pi => PI,
    };

    if !v.is_finite() {
        return Err(ErreurCalcul::ResultatNonFini);
    }
    Ok(v)
}
