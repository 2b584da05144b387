// src/noyau/rejeu.rs
//
// Rejeu : (programme, variables) -> (accumulateur, attente)
//
// Fonction PURE : ne touche jamais au programme rejoué.
// Utilisée par undo, par les changements de variables et par le chargement
// d’un programme transféré : les trois chemins ne peuvent donc pas diverger.
//
// Machine à états : Repos (attente = None) / EnAttente (attente = Some).
// Au plus UNE opération binaire en attente ; une nouvelle binaire résout
// d’abord l’ancienne (gauche -> droite, sans priorité).

use log::trace;

use super::jetons::Jeton;
use super::operations::{Operation, TableOperations};
use super::variables::Variables;

#[derive(Clone, Copy, Debug)]
pub struct OperationEnAttente {
    pub gauche: f64,
    pub fonction: fn(f64, f64) -> f64,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EtatCalcul {
    pub accumulateur: f64,
    pub attente: Option<OperationEnAttente>,
}

impl EtatCalcul {
    pub fn est_en_attente(&self) -> bool {
        self.attente.is_some()
    }

    /// Résout l’attente contre l’accumulateur courant (repasse en Repos).
    pub fn resoudre_attente(&mut self) {
        if let Some(op) = self.attente.take() {
            self.accumulateur = (op.fonction)(op.gauche, self.accumulateur);
        }
    }

    /// Opérande “qui arrive” : résout l’attente contre `valeur`,
    /// sinon devient l’accumulateur.
    pub fn recevoir_operande(&mut self, valeur: f64) {
        self.accumulateur = match self.attente.take() {
            Some(op) => (op.fonction)(op.gauche, valeur),
            None => valeur,
        };
    }

    /// Applique une opération de la table (sans rien enregistrer).
    pub fn appliquer(&mut self, operation: &Operation) {
        match *operation {
            Operation::Constante(v) => self.accumulateur = v,
            Operation::Unaire(f) => self.accumulateur = f(self.accumulateur),
            Operation::Binaire(f) => {
                self.resoudre_attente();
                self.attente = Some(OperationEnAttente {
                    gauche: self.accumulateur,
                    fonction: f,
                });
            }
            Operation::Egal => self.resoudre_attente(),
        }
    }
}

/// Rejoue un programme depuis un état propre.
pub fn rejouer(jetons: &[Jeton], table: &TableOperations, variables: &Variables) -> EtatCalcul {
    let mut etat = EtatCalcul::default();

    for jeton in jetons {
        match jeton {
            Jeton::Nombre(v) => etat.recevoir_operande(*v),
            Jeton::Symbole(s) => match table.get(s) {
                Some(op) => etat.appliquer(op),
                // symbole inconnu de la table => variable
                None => etat.recevoir_operande(variables.valeur(s)),
            },
        }
        trace!("rejeu {jeton:?} -> accumulateur {}", etat.accumulateur);
    }

    etat
}
