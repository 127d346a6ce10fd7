//! Configuration injectée (jamais de singleton global).
//!
//! Fichier JSON optionnel ; champs absents => valeurs par défaut.
//! Ex: `{ "decimales": 6, "capacite_historique": 20 }`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Précision d’affichage par défaut (décimales).
const DECIMALES_DEFAUT: usize = 10;

/// Garde-fou : au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const DECIMALES_MAX: usize = 15;

const CAPACITE_HISTORIQUE_DEFAUT: usize = 100;

/// Variable d’environnement donnant le chemin du fichier de configuration.
pub const VAR_CONFIG: &str = "CALCULATRICE_CONFIG";

#[derive(Error, Debug)]
pub enum ErreurConfig {
    #[error("lecture de {chemin:?} : {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON invalide : {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Décimales affichées (0..=15)
    pub decimales: usize,
    /// Entrées gardées par l’historique en mémoire
    pub capacite_historique: usize,
    /// Rangée scientifique visible au lancement
    pub scientifique_par_defaut: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            decimales: DECIMALES_DEFAUT,
            capacite_historique: CAPACITE_HISTORIQUE_DEFAUT,
            scientifique_par_defaut: false,
        }
    }
}

impl Config {
    pub fn depuis_json(texte: &str) -> Result<Self, ErreurConfig> {
        let mut c: Config = serde_json::from_str(texte)?;
        c.decimales = c.decimales.min(DECIMALES_MAX);
        Ok(c)
    }

    pub fn charger(chemin: &Path) -> Result<Self, ErreurConfig> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurConfig::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_json(&texte)
    }

    /// Chemin dans `CALCULATRICE_CONFIG` si présent ; défauts sinon (ou si illisible).
    pub fn depuis_env() -> Self {
        let Some(chemin) = std::env::var_os(VAR_CONFIG) else {
            return Self::default();
        };

        match Self::charger(Path::new(&chemin)) {
            Ok(c) => {
                tracing::info!(?chemin, "configuration chargée");
                c
            }
            Err(e) => {
                tracing::warn!(error = %e, "configuration ignorée, valeurs par défaut");
                Self::default()
            }
        }
    }

    /// Garde-fou : borne les décimales.
    pub fn set_decimales(&mut self, decimales: usize) {
        self.decimales = decimales.min(DECIMALES_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn champs_absents_par_defaut() {
        let c = Config::depuis_json("{}").unwrap();
        assert_eq!(c, Config::default());
    }

    #[test]
    fn decimales_bornees() {
        let c = Config::depuis_json(r#"{ "decimales": 99 }"#).unwrap();
        assert_eq!(c.decimales, DECIMALES_MAX);

        let mut c = Config::default();
        c.set_decimales(3);
        assert_eq!(c.decimales, 3);
        c.set_decimales(500);
        assert_eq!(c.decimales, DECIMALES_MAX);
    }

    #[test]
    fn json_invalide() {
        assert!(matches!(
            Config::depuis_json("{ decimales"),
            Err(ErreurConfig::Json(_))
        ));
    }

    #[test]
    fn fichier_absent() {
        let err = Config::charger(Path::new("/nulle/part/calc.json")).unwrap_err();
        assert!(matches!(err, ErreurConfig::Lecture { .. }));
    }

    #[test]
    fn charger_depuis_fichier() {
        let chemin = std::env::temp_dir().join("calculatrice_clavier_config_test.json");
        std::fs::write(&chemin, r#"{ "capacite_historique": 5, "scientifique_par_defaut": true }"#)
            .unwrap();
        let c = Config::charger(&chemin).unwrap();
        let _ = std::fs::remove_file(&chemin);

        assert_eq!(c.capacite_historique, 5);
        assert!(c.scientifique_par_defaut);
        assert_eq!(c.decimales, 10);
    }

    /// Seul test qui touche `CALCULATRICE_CONFIG` (les tests tournent en parallèle).
    #[test]
    fn depuis_env_repli_sur_defauts() {
        let absent = std::env::temp_dir().join(format!(
            "calculatrice_clavier_absent_{}.json",
            std::process::id()
        ));
        std::env::set_var(VAR_CONFIG, &absent);
        assert_eq!(Config::depuis_env(), Config::default());

        let illisible = std::env::temp_dir().join(format!(
            "calculatrice_clavier_illisible_{}.json",
            std::process::id()
        ));
        std::fs::write(&illisible, "{ pas du json").unwrap();
        std::env::set_var(VAR_CONFIG, &illisible);
        assert_eq!(Config::depuis_env(), Config::default());

        std::fs::write(&illisible, r#"{ "decimales": 4 }"#).unwrap();
        assert_eq!(Config::depuis_env().decimales, 4);

        let _ = std::fs::remove_file(&illisible);
        std::env::remove_var(VAR_CONFIG);
        assert_eq!(Config::depuis_env(), Config::default());
    }
}
