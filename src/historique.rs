//! Historique des calculs (collaborateur externe du noyau).
//!
//! Le noyau ne connaît que le trait `HistorySink`. Un échec d’enregistrement
//! est journalisé et signalé, jamais bloquant : le calcul reste affiché.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::noyau::{EtatSaisie, Phase};

#[derive(Error, Debug)]
pub enum ErreurHistorique {
    /// Rien de valide à enregistrer (pas juste après =, ou Error).
    #[error("seul le résultat d’un calcul valide peut être enregistré")]
    RienAEnregistrer,

    #[error("historique indisponible : {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub resultat: String,
    pub cree_le: DateTime<Utc>,
}

pub trait HistorySink {
    fn record(&mut self, expression: &str, resultat: &str) -> Result<(), ErreurHistorique>;
}

/// Enregistre le résultat courant si (et seulement si) il vient d’être évalué.
pub fn enregistrer(
    etat: &EtatSaisie,
    sink: &mut impl HistorySink,
) -> Result<(), ErreurHistorique> {
    if etat.phase() != Phase::Evalue {
        return Err(ErreurHistorique::RienAEnregistrer);
    }

    let expression = etat.calcul_source.as_deref().unwrap_or(&etat.expression);

    match sink.record(expression, &etat.affichage) {
        Ok(()) => {
            info!(expression, resultat = %etat.affichage, "calcul enregistré");
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, expression, "échec d’enregistrement de l’historique");
            Err(e)
        }
    }
}

/// Historique borné en mémoire : au-delà de la capacité, le plus ancien part.
#[derive(Debug, Clone)]
pub struct HistoriqueMemoire {
    entrees: VecDeque<HistoryEntry>,
    capacite: usize,
}

impl HistoriqueMemoire {
    pub fn new(capacite: usize) -> Self {
        Self {
            entrees: VecDeque::new(),
            capacite: capacite.max(1),
        }
    }

    /// Du plus ancien au plus récent.
    pub fn entrees(&self) -> &VecDeque<HistoryEntry> {
        &self.entrees
    }

    /// Les `limite` plus récentes, la plus récente d’abord.
    pub fn recentes(&self, limite: usize) -> Vec<&HistoryEntry> {
        self.entrees.iter().rev().take(limite).collect()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }
}

impl HistorySink for HistoriqueMemoire {
    fn record(&mut self, expression: &str, resultat: &str) -> Result<(), ErreurHistorique> {
        if self.entrees.len() >= self.capacite {
            self.entrees.pop_front();
        }
        self.entrees.push_back(HistoryEntry {
            expression: expression.to_string(),
            resultat: resultat.to_string(),
            cree_le: Utc::now(),
        });
        Ok(())
    }
}
