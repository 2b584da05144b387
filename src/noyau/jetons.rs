// src/noyau/jetons.rs
//
// Jetons + programme.
// - Nombre : opérande numérique saisie
// - Symbole : opérateur OU variable (la table tranche au moment de l’évaluation)
//
// Le programme est la seule source de vérité : accumulateur et attente
// se recalculent toujours par rejeu (voir rejeu.rs).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Jeton {
    Nombre(f64),

    // Opérateur ou variable : PAS de décision ici.
    Symbole(String),
}

/// Suite ordonnée de jetons, transférable telle quelle (clone / JSON).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Programme {
    jetons: Vec<Jeton>,
}

impl Programme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn len(&self) -> usize {
        self.jetons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jetons.is_empty()
    }

    pub fn dernier(&self) -> Option<&Jeton> {
        self.jetons.last()
    }

    pub fn pousser(&mut self, jeton: Jeton) {
        self.jetons.push(jeton);
    }

    /// Saisie continue : si le dernier jeton est un nombre, on le remplace
    /// (l’utilisateur “tape encore” dans le même nombre), sinon on ajoute.
    pub fn poser_nombre(&mut self, valeur: f64) {
        match self.jetons.last_mut() {
            Some(Jeton::Nombre(v)) => *v = valeur,
            _ => self.jetons.push(Jeton::Nombre(valeur)),
        }
    }

    pub fn retirer_dernier(&mut self) -> Option<Jeton> {
        self.jetons.pop()
    }

    pub fn vider(&mut self) {
        self.jetons.clear();
    }
}

impl From<Vec<Jeton>> for Programme {
    fn from(jetons: Vec<Jeton>) -> Self {
        Self { jetons }
    }
}

/// Format utilitaire (debug/trace) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Symbole(s) => s.clone(),
        };
        out.push(s);
    }
    out.join(" ")
}
