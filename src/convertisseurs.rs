// src/convertisseurs.rs
//
// Convertisseurs (tables statiques) + pourboire.
// - Longueur : facteur vers le mètre
// - Masse    : facteur vers le kilogramme
// - Température : passage par le kelvin
//
// Entrée texte non numérique => None (l’UI n’affiche rien).

/// Unité à facteur linéaire vers une unité de base.
pub trait UniteLineaire: Copy + PartialEq + 'static {
    const TOUTES: &'static [Self];
    fn facteur(self) -> f64;
    fn nom(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Longueur {
    Metre,
    Kilometre,
    Centimetre,
    Millimetre,
    Mile,
    Yard,
    Pied,
    Pouce,
}

impl UniteLineaire for Longueur {
    const TOUTES: &'static [Self] = &[
        Longueur::Metre,
        Longueur::Kilometre,
        Longueur::Centimetre,
        Longueur::Millimetre,
        Longueur::Mile,
        Longueur::Yard,
        Longueur::Pied,
        Longueur::Pouce,
    ];

    fn facteur(self) -> f64 {
        match self {
            Longueur::Metre => 1.0,
            Longueur::Kilometre => 1000.0,
            Longueur::Centimetre => 0.01,
            Longueur::Millimetre => 0.001,
            Longueur::Mile => 1609.34,
            Longueur::Yard => 0.9144,
            Longueur::Pied => 0.3048,
            Longueur::Pouce => 0.0254,
        }
    }

    fn nom(self) -> &'static str {
        match self {
            Longueur::Metre => "mètre",
            Longueur::Kilometre => "kilomètre",
            Longueur::Centimetre => "centimètre",
            Longueur::Millimetre => "millimètre",
            Longueur::Mile => "mile",
            Longueur::Yard => "yard",
            Longueur::Pied => "pied",
            Longueur::Pouce => "pouce",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Masse {
    Kilogramme,
    Gramme,
    Milligramme,
    Livre,
    Once,
    Tonne,
}

impl UniteLineaire for Masse {
    const TOUTES: &'static [Self] = &[
        Masse::Kilogramme,
        Masse::Gramme,
        Masse::Milligramme,
        Masse::Livre,
        Masse::Once,
        Masse::Tonne,
    ];

    fn facteur(self) -> f64 {
        match self {
            Masse::Kilogramme => 1.0,
            Masse::Gramme => 0.001,
            Masse::Milligramme => 0.000001,
            Masse::Livre => 0.453592,
            Masse::Once => 0.0283495,
            Masse::Tonne => 1000.0,
        }
    }

    fn nom(self) -> &'static str {
        match self {
            Masse::Kilogramme => "kilogramme",
            Masse::Gramme => "gramme",
            Masse::Milligramme => "milligramme",
            Masse::Livre => "livre",
            Masse::Once => "once",
            Masse::Tonne => "tonne",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Temperature {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Temperature {
    pub const TOUTES: [Temperature; 3] = [
        Temperature::Celsius,
        Temperature::Fahrenheit,
        Temperature::Kelvin,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Temperature::Celsius => "Celsius",
            Temperature::Fahrenheit => "Fahrenheit",
            Temperature::Kelvin => "Kelvin",
        }
    }

    fn vers_kelvin(self, v: f64) -> f64 {
        match self {
            Temperature::Celsius => v + 273.15,
            Temperature::Fahrenheit => (v - 32.0) * 5.0 / 9.0 + 273.15,
            Temperature::Kelvin => v,
        }
    }

    fn depuis_kelvin(self, k: f64) -> f64 {
        match self {
            Temperature::Celsius => k - 273.15,
            Temperature::Fahrenheit => (k - 273.15) * 9.0 / 5.0 + 32.0,
            Temperature::Kelvin => k,
        }
    }
}

fn lire_nombre(texte: &str) -> Option<f64> {
    texte.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn convertir<U: UniteLineaire>(valeur: f64, de: U, vers: U) -> f64 {
    valeur * de.facteur() / vers.facteur()
}

/// Longueur / masse : rendu à 4 décimales.
pub fn convertir_texte<U: UniteLineaire>(texte: &str, de: U, vers: U) -> Option<String> {
    let v = convertir(lire_nombre(texte)?, de, vers);
    v.is_finite().then(|| format!("{v:.4}"))
}

pub fn convertir_temperature(valeur: f64, de: Temperature, vers: Temperature) -> f64 {
    vers.depuis_kelvin(de.vers_kelvin(valeur))
}

/// Température : rendu à 2 décimales.
pub fn convertir_temperature_texte(texte: &str, de: Temperature, vers: Temperature) -> Option<String> {
    let v = convertir_temperature(lire_nombre(texte)?, de, vers);
    Some(format!("{v:.2}"))
}

/* ------------------------ Pourboire ------------------------ */

pub const POURCENTAGES_POURBOIRE: [u32; 5] = [10, 15, 18, 20, 25];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pourboire {
    pub pourboire: f64,
    pub total_par_personne: f64,
}

/// Facture illisible ou ≤ 0 => zéros ; au moins une personne.
pub fn calculer_pourboire(facture: &str, pourcentage: u32, personnes: u32) -> Pourboire {
    let Some(montant) = lire_nombre(facture).filter(|m| *m > 0.0) else {
        return Pourboire::default();
    };

    let pourboire = montant * f64::from(pourcentage) / 100.0;
    let total = montant + pourboire;

    Pourboire {
        pourboire,
        total_par_personne: total / f64::from(personnes.max(1)),
    }
}
