// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix), × ÷ % avant + -
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - tous les opérateurs sont associatifs à gauche
// - a % b = a/100 × b
// - division par zéro => erreur (jamais ±∞ silencieux)

use super::erreur::ErreurCalcul;
use super::jetons::Jeton;
use super::touches::Operateur;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [3, +, 4, ×, 2]
///   rpn:    [3, 4, 2, ×, +]
pub fn to_rpn(tokens: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out: Vec<Jeton> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Operateur> = Vec::new();

    // Alternance stricte valeur / opérateur : détecte "3+" , "+3", "3××4"
    let mut attend_valeur = true;

    for tok in tokens {
        match *tok {
            Jeton::Nombre(_) => {
                if !attend_valeur {
                    return Err(ErreurCalcul::malformee("nombre inattendu"));
                }
                out.push(*tok);
                attend_valeur = false;
            }

            Jeton::Op(op) => {
                if attend_valeur {
                    return Err(ErreurCalcul::malformee(format!(
                        "opérateur '{}' sans opérande",
                        op.symbole()
                    )));
                }

                while let Some(&top) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Jeton::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(op);
                attend_valeur = true;
            }
        }
    }

    if attend_valeur {
        return Err(if out.is_empty() {
            ErreurCalcul::malformee("expression vide")
        } else {
            ErreurCalcul::malformee("expression terminée par un opérateur")
        });
    }

    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    Ok(out)
}

/// Évalue une RPN.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Jeton::Nombre(v) => st.push(v),

            Jeton::Op(op) => {
                let b = st.pop().ok_or_else(|| ErreurCalcul::malformee("pile vide"))?;
                let a = st.pop().ok_or_else(|| ErreurCalcul::malformee("pile vide"))?;
                st.push(applique_op(op, a, b)?);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurCalcul::malformee("expression invalide"));
    }
    Ok(st[0])
}

fn applique_op(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Pourcent => a / 100.0 * b,
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};

    fn rpn_txt(s: &str) -> String {
        format_tokens(&to_rpn(&tokenize(s).unwrap()).unwrap())
    }

    #[test]
    fn precedence_et_associativite() {
        assert_eq!(rpn_txt("3+4×2"), "3 4 2 × +");
        assert_eq!(rpn_txt("8-3-2"), "8 3 - 2 -");
        assert_eq!(rpn_txt("8÷4×2"), "8 4 ÷ 2 ×");
        assert_eq!(rpn_txt("1+20%50"), "1 20 50 % +");
    }

    #[test]
    fn operateur_pendant() {
        let j = tokenize("3+").unwrap();
        assert!(matches!(
            to_rpn(&j),
            Err(ErreurCalcul::ExpressionMalformee(_))
        ));
        let j = tokenize("×3").unwrap();
        assert!(to_rpn(&j).is_err());
    }

    #[test]
    fn vide() {
        assert!(to_rpn(&[]).is_err());
    }

    #[test]
    fn division_par_zero() {
        let rpn = to_rpn(&tokenize("5÷0").unwrap()).unwrap();
        assert_eq!(eval_rpn(&rpn), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn pourcent() {
        let rpn = to_rpn(&tokenize("20%50").unwrap()).unwrap();
        assert_eq!(eval_rpn(&rpn).unwrap(), 10.0);
    }
}
