// src/noyau/touches.rs
//
// Touches du pavé (une pression = une Touche).
// - Chiffre / Virgule : saisie de l’opérande courant
// - Operateur         : + - × ÷ %
// - Action            : C, ⌫, =
// - Fonction          : couche scientifique (agit sur l’affichage)

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    /// a % b = a/100 × b
    Pourcent,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Pourcent,
    ];

    /// Symbole écrit dans l’expression visible.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Pourcent => '%',
        }
    }

    /// Accepte aussi les alias ASCII `*` et `/`.
    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            '%' => Some(Operateur::Pourcent),
            _ => None,
        }
    }

    pub(crate) fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise | Operateur::Pourcent => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// C
    Effacer,
    /// ⌫
    Retour,
    /// =
    Egal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionSci {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
    Pi,
}

impl FonctionSci {
    pub const TOUTES: [FonctionSci; 7] = [
        FonctionSci::Sin,
        FonctionSci::Cos,
        FonctionSci::Tan,
        FonctionSci::Log,
        FonctionSci::Ln,
        FonctionSci::Racine,
        FonctionSci::Pi,
    ];

    pub fn libelle(self) -> &'static str {
        match self {
            FonctionSci::Sin => "sin",
            FonctionSci::Cos => "cos",
            FonctionSci::Tan => "tan",
            FonctionSci::Log => "log",
            FonctionSci::Ln => "ln",
            FonctionSci::Racine => "√",
            FonctionSci::Pi => "π",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    /// 0..=9 (toute autre valeur est ignorée par l’accumulateur)
    Chiffre(u8),
    Virgule,
    Operateur(Operateur),
    Action(Action),
    Fonction(FonctionSci),
}

impl Touche {
    pub const EFFACER: Touche = Touche::Action(Action::Effacer);
    pub const RETOUR: Touche = Touche::Action(Action::Retour);
    pub const EGAL: Touche = Touche::Action(Action::Egal);
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Touche::Chiffre(d) => write!(f, "{d}"),
            Touche::Virgule => f.write_str("."),
            Touche::Operateur(op) => write!(f, "{}", op.symbole()),
            Touche::Action(Action::Effacer) => f.write_str("C"),
            Touche::Action(Action::Retour) => f.write_str("⌫"),
            Touche::Action(Action::Egal) => f.write_str("="),
            Touche::Fonction(fs) => f.write_str(fs.libelle()),
        }
    }
}

/// Libellé de bouton -> Touche (insensible à la casse pour les mots).
impl FromStr for Touche {
    type Err = ErreurCalcul;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();

        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Ok(Touche::Chiffre(d as u8));
            }
            if c == '.' {
                return Ok(Touche::Virgule);
            }
            if let Some(op) = Operateur::depuis_symbole(c) {
                return Ok(Touche::Operateur(op));
            }
        }

        let touche = match t.to_lowercase().as_str() {
            "c" => Touche::EFFACER,
            "⌫" | "del" => Touche::RETOUR,
            "=" => Touche::EGAL,
            "sin" => Touche::Fonction(FonctionSci::Sin),
            "cos" => Touche::Fonction(FonctionSci::Cos),
            "tan" => Touche::Fonction(FonctionSci::Tan),
            "log" => Touche::Fonction(FonctionSci::Log),
            "ln" => Touche::Fonction(FonctionSci::Ln),
            "√" | "sqrt" => Touche::Fonction(FonctionSci::Racine),
            "π" | "pi" => Touche::Fonction(FonctionSci::Pi),
            _ => return Err(ErreurCalcul::ToucheInconnue(t.to_string())),
        };
        Ok(touche)
    }
}
