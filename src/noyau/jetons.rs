// src/noyau/jetons.rs
//
// Lexer de l’expression visible (alphabet fermé).
// Supporte:
// - nombres décimaux : 12, 3.5, 3., .5
// - signe '-' collé au nombre s’il arrive en tête ou juste après un opérateur
//   (résultats négatifs, valeurs collées)
// - opérateurs + - × ÷ % (alias ASCII * et /)
// - espaces ignorés
//
// Tout le reste (lettres, parenthèses, …) est refusé : aucun identifiant n’est
// jamais interprété.

use super::erreur::ErreurCalcul;
use super::touches::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

/// Tokenize une expression en jetons.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let attend_valeur = !matches!(out.last(), Some(Jeton::Nombre(_)));

        // Signe : seulement là où une valeur est attendue, et collé à un nombre
        let signe = c == '-'
            && attend_valeur
            && chars
                .get(i + 1)
                .is_some_and(|n| n.is_ascii_digit() || *n == '.');

        if let (false, Some(op)) = (signe, Operateur::depuis_symbole(c)) {
            out.push(Jeton::Op(op));
            i += 1;
            continue;
        }

        if signe || c.is_ascii_digit() || c == '.' {
            if !attend_valeur {
                return Err(ErreurCalcul::malformee("deux nombres consécutifs"));
            }

            let start = i;
            if signe {
                i += 1;
            }
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            let txt: String = chars[start..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::malformee(format!("nombre invalide {txt:?}")))?;
            // littéral trop long : f64 le lit comme ±inf
            if !v.is_finite() {
                return Err(ErreurCalcul::ResultatNonFini);
            }

            out.push(Jeton::Nombre(v));
            continue;
        }

        return Err(ErreurCalcul::malformee(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
