//! Calculatrice à pavé : bibliothèque
//!
//! - noyau          : accumulateur, évaluateur, couche scientifique (pur)
//! - config         : configuration injectée
//! - historique     : puits d’historique (trait + mémoire)
//! - presse_papiers : copier / coller
//! - convertisseurs : longueur, masse, température, pourboire
//!
//! L’UI (eframe) vit dans le binaire et ne fait qu’appeler ces modules.

pub mod config;
pub mod convertisseurs;
pub mod historique;
pub mod noyau;
pub mod presse_papiers;

pub use config::Config;

/// Journalisation : `RUST_LOG` si présent, sinon "info".
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init : un second appel (tests, rechargement) ne panique pas
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
