//! src/noyau/erreur.rs
//!
//! Taxonomie des erreurs du noyau.
//!
//! Contrat : aucune de ces erreurs ne “remonte” jusqu’à l’UI sous forme de panique.
//! L’évaluateur et la couche scientifique les RETOURNENT ; l’accumulateur (saisie.rs)
//! les convertit en état d’affichage "Error".

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Expression vide, terminée par un opérateur, ou caractère hors alphabet.
    #[error("expression malformée : {0}")]
    ExpressionMalformee(String),

    #[error("division par zéro")]
    DivisionParZero,

    /// NaN ou ±∞ (ex: 1e308 × 10).
    #[error("résultat non fini")]
    ResultatNonFini,

    /// Fonction scientifique hors domaine (log ≤ 0, √ négatif, …).
    #[error("hors domaine : {0}")]
    HorsDomaine(&'static str),

    /// Texte collé qui n’est pas un nombre fini.
    #[error("presse-papiers : {0:?} n’est pas un nombre")]
    PressePapiers(String),

    /// Libellé de touche inconnu (FromStr de Touche).
    #[error("touche inconnue : {0:?}")]
    ToucheInconnue(String),
}

impl ErreurCalcul {
    pub(crate) fn malformee(msg: impl Into<String>) -> Self {
        Self::ExpressionMalformee(msg.into())
    }
}
