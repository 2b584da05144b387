// src/noyau/variables.rs
//
// Liaisons de variables (nom -> valeur).
// Variable non liée => 0.0 (jamais d’erreur).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    valeurs: BTreeMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Valeur liée, ou 0.0.
    pub fn valeur(&self, nom: &str) -> f64 {
        self.valeurs.get(nom).copied().unwrap_or(0.0)
    }

    pub fn get(&self, nom: &str) -> Option<f64> {
        self.valeurs.get(nom).copied()
    }

    /// Retourne l’ancienne valeur (None si le nom n’était pas lié).
    pub fn lier(&mut self, nom: impl Into<String>, valeur: f64) -> Option<f64> {
        self.valeurs.insert(nom.into(), valeur)
    }

    pub fn delier(&mut self, nom: &str) -> Option<f64> {
        self.valeurs.remove(nom)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.valeurs.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Variables {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            valeurs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
