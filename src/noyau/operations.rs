// src/noyau/operations.rs
//
// Table des opérations (symbole -> Operation).
// Construite une fois par moteur, jamais modifiée ensuite.
//
// Deux variantes :
// - Corrigee   : "-" soustrait
// - Historique : "-" additionne (comportement de la calculatrice d’origine, parité stricte)

use std::collections::HashMap;
use std::f64::consts::{E, PI};

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    Constante(f64),
    Unaire(fn(f64) -> f64),
    Binaire(fn(f64, f64) -> f64),
    Egal,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Variante {
    #[default]
    Corrigee,
    Historique,
}

#[derive(Clone, Debug)]
pub struct TableOperations {
    operations: HashMap<String, Operation>,
}

impl Default for TableOperations {
    fn default() -> Self {
        Self::pour(Variante::default())
    }
}

impl TableOperations {
    pub fn pour(variante: Variante) -> Self {
        let moins: fn(f64, f64) -> f64 = match variante {
            Variante::Corrigee => |a, b| a - b,
            Variante::Historique => |a, b| a + b,
        };

        let entrees: [(&str, Operation); 9] = [
            ("π", Operation::Constante(PI)),
            ("e", Operation::Constante(E)),
            ("√", Operation::Unaire(f64::sqrt)),
            ("cos", Operation::Unaire(f64::cos)),
            ("+", Operation::Binaire(|a, b| a + b)),
            ("-", Operation::Binaire(moins)),
            ("÷", Operation::Binaire(|a, b| a / b)),
            ("×", Operation::Binaire(|a, b| a * b)),
            ("=", Operation::Egal),
        ];

        Self {
            operations: entrees
                .into_iter()
                .map(|(s, op)| (s.to_string(), op))
                .collect(),
        }
    }

    pub fn get(&self, symbole: &str) -> Option<&Operation> {
        self.operations.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.operations.contains_key(symbole)
    }

    pub fn est_unaire(&self, symbole: &str) -> bool {
        matches!(self.get(symbole), Some(Operation::Unaire(_)))
    }

    /// Symboles connus, triés (affichage d’aide).
    pub fn symboles(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
