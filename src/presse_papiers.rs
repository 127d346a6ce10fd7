//! Presse-papiers (collaborateur externe du noyau).
//!
//! Copier écrit l’affichage ; coller passe par `noyau::coller_texte`
//! (texte non numérique => erreur, état intact).

use crate::noyau::{coller_texte, EtatSaisie, ErreurCalcul};

pub trait PressePapiers {
    fn lire_texte(&mut self) -> String;
    fn ecrire_texte(&mut self, texte: &str);
}

pub fn copier(etat: &EtatSaisie, pp: &mut impl PressePapiers) {
    pp.ecrire_texte(&etat.affichage);
}

pub fn coller(
    etat: &EtatSaisie,
    pp: &mut impl PressePapiers,
) -> Result<EtatSaisie, ErreurCalcul> {
    let texte = pp.lire_texte();
    coller_texte(etat, &texte)
}

/// Presse-papiers local (tests, plateformes sans presse-papiers système).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressePapiersMemoire {
    pub contenu: String,
}

impl PressePapiers for PressePapiersMemoire {
    fn lire_texte(&mut self) -> String {
        self.contenu.clone()
    }

    fn ecrire_texte(&mut self, texte: &str) {
        self.contenu = texte.to_string();
    }
}
