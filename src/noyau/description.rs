// src/noyau/description.rs
//
// Description “infixe” du programme : pli gauche -> droite, PAS un parseur.
// - nombre  : forme décimale par défaut (9.0 -> "9", 2.5 -> "2.5")
// - unaire  : enveloppe tout ce qui précède : √(…)
// - le reste (binaires, constantes, "=", variables, inconnus) : collé tel quel
//
// Aucune parenthèse pour la priorité : "3+4×5" ne dit pas comment grouper.

use super::jetons::Jeton;
use super::operations::TableOperations;

pub fn decrire(jetons: &[Jeton], table: &TableOperations) -> String {
    let mut description = String::new();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(v) => description.push_str(&v.to_string()),
            Jeton::Symbole(s) if table.est_unaire(s) => {
                description = format!("{s}({description})");
            }
            Jeton::Symbole(s) => description.push_str(s),
        }
    }

    description
}
