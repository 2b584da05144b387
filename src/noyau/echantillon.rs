// src/noyau/echantillon.rs
//
// Échantillonnage d’un programme vu comme fonction d’UNE variable libre.
// Pas de dessin ici : on produit seulement des points (x, y).
//
// Chaque point = rejeu pur du programme avec `nom` lié à x
// (les autres liaisons sont conservées).

use std::ops::RangeInclusive;

use super::jetons::Programme;
use super::operations::TableOperations;
use super::rejeu::rejouer;
use super::variables::Variables;

/// Variable libre par défaut (comme l’écran “graphe” d’origine).
pub const VARIABLE_GRAPHE: &str = "M";

/// Garde-fou : nombre maximal de points par échantillonnage (anti-gel / anti-allocation).
pub const ECHANTILLONS_MAX: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Valeur du programme quand `nom` vaut `x`.
pub fn evaluer_en(
    programme: &Programme,
    table: &TableOperations,
    variables: &Variables,
    nom: &str,
    x: f64,
) -> f64 {
    let mut liees = variables.clone();
    liees.lier(nom, x);
    rejouer(programme.jetons(), table, &liees).accumulateur
}

/// `n` points régulièrement espacés sur [debut, fin] (bornes incluses).
/// n == 0 => aucun point ; n == 1 => seulement `debut`.
/// `n` est borné à ECHANTILLONS_MAX.
pub fn echantillonner(
    programme: &Programme,
    table: &TableOperations,
    variables: &Variables,
    nom: &str,
    plage: RangeInclusive<f64>,
    n: usize,
) -> Vec<Point> {
    let n = n.min(ECHANTILLONS_MAX);
    let (debut, fin) = plage.into_inner();
    let pas = if n > 1 {
        (fin - debut) / (n - 1) as f64
    } else {
        0.0
    };

    // Une seule copie des liaisons, réutilisée pour chaque point.
    let mut liees = variables.clone();
    (0..n)
        .map(|i| {
            let x = if i + 1 == n && n > 1 {
                fin
            } else {
                debut + pas * i as f64
            };
            liees.lier(nom, x);
            let y = rejouer(programme.jetons(), table, &liees).accumulateur;
            Point { x, y }
        })
        .collect()
}
