//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir l’état de la calculatrice (saisie, historique, démarche, panneaux annexes)
//! et offrir des actions simples appelées par la vue.
//!
//! Contrats :
//! - Toute la logique de calcul passe par le noyau (`apply_token_with`, `coller_texte`).
//! - Une erreur de collage ou d’historique devient une notification, jamais un état corrompu.

use calculatrice_clavier::convertisseurs::{Longueur, Masse, Temperature};
use calculatrice_clavier::historique::{enregistrer, HistoriqueMemoire};
use calculatrice_clavier::noyau::{
    apply_token_with, coller_texte, evaluer_avec_demarche, Action, Demarche, ErreurCalcul,
    EtatSaisie, Phase, Touche,
};
use calculatrice_clavier::presse_papiers::{copier, coller, PressePapiers, PressePapiersMemoire};
use calculatrice_clavier::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Onglet {
    Calculatrice,
    Convertisseur,
    Pourboire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grandeur {
    Longueur,
    Masse,
    Temperature,
}

#[derive(Clone, Debug)]
pub struct Conversion {
    pub grandeur: Grandeur,
    pub valeur: String,
    pub longueur: (Longueur, Longueur),
    pub masse: (Masse, Masse),
    pub temperature: (Temperature, Temperature),
}

impl Default for Conversion {
    fn default() -> Self {
        Self {
            grandeur: Grandeur::Longueur,
            valeur: String::new(),
            longueur: (Longueur::Metre, Longueur::Pied),
            masse: (Masse::Kilogramme, Masse::Livre),
            temperature: (Temperature::Celsius, Temperature::Fahrenheit),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SaisiePourboire {
    pub facture: String,
    pub pourcentage: u32,
    pub personnes: u32,
}

impl Default for SaisiePourboire {
    fn default() -> Self {
        Self {
            facture: String::new(),
            pourcentage: 15,
            personnes: 1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- calculatrice ---
    pub saisie: EtatSaisie,
    pub demarche: Demarche,
    pub historique: HistoriqueMemoire,

    // --- paramètres ---
    pub config: Config,
    pub scientifique: bool,

    // --- UX ---
    pub onglet: Onglet,
    pub notification: Option<String>,
    /// Copie locale : egui écrit dans le presse-papiers système mais ne sait pas le relire
    pub presse_papiers: PressePapiersMemoire,

    // --- panneaux annexes ---
    pub conversion: Conversion,
    pub pourboire: SaisiePourboire,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppCalc {
    pub fn new(config: Config) -> Self {
        Self {
            saisie: EtatSaisie::default(),
            demarche: Demarche::default(),
            historique: HistoriqueMemoire::new(config.capacite_historique),
            scientifique: config.scientifique_par_defaut,
            config,
            onglet: Onglet::Calculatrice,
            notification: None,
            presse_papiers: PressePapiersMemoire::default(),
            conversion: Conversion::default(),
            pourboire: SaisiePourboire::default(),
        }
    }

    /* ------------------------ Actions “touches” ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        // Démarche : seulement pour un = qui évalue réellement
        if touche == Touche::EGAL && self.saisie.phase() == Phase::Saisie {
            self.demarche = evaluer_avec_demarche(&self.saisie.expression)
                .map(|(_v, d)| d)
                .unwrap_or_default();
        } else if touche == Touche::Action(Action::Effacer) {
            self.demarche = Demarche::default();
        }

        let etat = std::mem::take(&mut self.saisie);
        self.saisie = apply_token_with(etat, touche, &self.config);
        self.notification = None;
    }

    /// ESC : comme le bouton "C".
    pub fn effacer(&mut self) {
        self.appuyer(Touche::EFFACER);
    }

    pub fn basculer_scientifique(&mut self) {
        self.scientifique = !self.scientifique;
    }

    pub fn set_decimales(&mut self, decimales: usize) {
        self.config.set_decimales(decimales);
    }

    /* ------------------------ Presse-papiers ------------------------ */

    pub fn copier_vers(&mut self, pp: &mut impl PressePapiers) {
        copier(&self.saisie, pp);
        self.notification = Some(format!("copié : {}", self.saisie.affichage));
    }

    pub fn coller_depuis(&mut self, pp: &mut impl PressePapiers) {
        let r = coller(&self.saisie, pp);
        self.deposer_collage(r);
    }

    /// Texte reçu directement (Ctrl+V).
    pub fn coller_texte(&mut self, texte: &str) {
        let r = coller_texte(&self.saisie, texte);
        self.deposer_collage(r);
    }

    fn deposer_collage(&mut self, r: Result<EtatSaisie, ErreurCalcul>) {
        match r {
            Ok(e) => {
                self.saisie = e;
                self.notification = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "collage refusé");
                self.notification = Some(err.to_string());
            }
        }
    }

    /* ------------------------ Historique ------------------------ */

    pub fn enregistrer_historique(&mut self) {
        self.notification = match enregistrer(&self.saisie, &mut self.historique) {
            Ok(()) => Some("enregistré dans l’historique".to_string()),
            Err(e) => Some(e.to_string()),
        };
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
        self.notification = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calculatrice_clavier::noyau::Operateur;
    use pretty_assertions::assert_eq;

    fn taper(app: &mut AppCalc, touches: &str) {
        for c in touches.chars() {
            app.appuyer(c.to_string().parse().unwrap());
        }
    }

    #[test]
    fn egal_remplit_la_demarche() {
        let mut app = AppCalc::default();
        taper(&mut app, "3+4×2=");
        assert_eq!(app.saisie.affichage, "11");
        assert_eq!(app.demarche.rpn, "3 4 2 × +");

        app.effacer();
        assert_eq!(app.demarche, Demarche::default());
        assert_eq!(app.saisie, EtatSaisie::default());
    }

    #[test]
    fn historique_seulement_apres_evaluation() {
        let mut app = AppCalc::default();
        taper(&mut app, "12");
        app.enregistrer_historique();
        assert!(app.historique.is_empty());
        assert!(app.notification.is_some());

        app.appuyer(Touche::Operateur(Operateur::Plus));
        taper(&mut app, "8=");
        app.enregistrer_historique();
        assert_eq!(app.historique.len(), 1);
        assert_eq!(app.historique.entrees()[0].expression, "12+8");
    }

    #[test]
    fn collage_refuse_garde_l_etat() {
        let mut app = AppCalc::default();
        taper(&mut app, "7");
        let mut pp = PressePapiersMemoire {
            contenu: "abc".into(),
        };
        app.coller_depuis(&mut pp);
        assert_eq!(app.saisie.affichage, "7");
        assert!(app.notification.is_some());
    }

    #[test]
    fn config_appliquee_au_lancement() {
        let config = Config {
            decimales: 2,
            scientifique_par_defaut: true,
            ..Config::default()
        };
        let mut app = AppCalc::new(config);
        assert!(app.scientifique);

        taper(&mut app, "2√");
        assert_eq!(app.saisie.affichage, "1.41");
    }
}
