// src/noyau/cerveau.rs
//
// Cerveau de la calculatrice : programme + accumulateur + attente.
//
// Contrats :
// - Jamais d’erreur : variable non liée => 0.0, symbole inconnu => enregistré, sans effet.
// - undo / changement de variable / chargement => rejeu complet (rejeu.rs), jamais
//   de “soustraction” incrémentale d’état.
// - Un seul thread appelant ; aucune synchronisation interne.

use log::debug;

use super::description::decrire;
use super::jetons::{format_jetons, Jeton, Programme};
use super::operations::{TableOperations, Variante};
use super::rejeu::{rejouer, EtatCalcul};
use super::variables::Variables;

#[derive(Clone, Debug, Default)]
pub struct Cerveau {
    etat: EtatCalcul,
    programme: Programme,
    variables: Variables,
    operations: TableOperations,
}

impl Cerveau {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_variante(variante: Variante) -> Self {
        Self::avec_table(TableOperations::pour(variante))
    }

    pub fn avec_table(operations: TableOperations) -> Self {
        Self {
            operations,
            ..Self::default()
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Opérande numérique. Si le dernier jeton est un nombre, il est remplacé
    /// (saisie continue). L’attente n’est PAS résolue ici.
    pub fn set_operand(&mut self, valeur: f64) {
        self.programme.poser_nombre(valeur);
        self.etat.accumulateur = valeur;
    }

    /// Opérande variable : valeur liée (ou 0.0), résout l’attente tout de suite.
    pub fn set_operand_variable(&mut self, nom: &str) {
        self.programme.pousser(Jeton::Symbole(nom.to_string()));
        let valeur = self.variables.valeur(nom);
        self.etat.recevoir_operande(valeur);
        debug!("variable {nom} = {valeur} -> accumulateur {}", self.etat.accumulateur);
    }

    pub fn perform_operation(&mut self, symbole: &str) {
        debug!(
            "opération {symbole} sur accumulateur {}",
            self.etat.accumulateur
        );
        self.programme.pousser(Jeton::Symbole(symbole.to_string()));
        if let Some(op) = self.operations.get(symbole) {
            self.etat.appliquer(op);
        }
    }

    /* ------------------------ Remise à zéro / annulation ------------------------ */

    pub fn clear(&mut self) {
        self.etat = EtatCalcul::default();
        self.programme.vider();
    }

    /// Retire le dernier jeton (s’il existe) puis rejoue tout.
    pub fn undo(&mut self) {
        self.programme.retirer_dernier();
        self.rejouer();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn result(&self) -> f64 {
        self.etat.accumulateur
    }

    pub fn description(&self) -> String {
        decrire(self.programme.jetons(), &self.operations)
    }

    pub fn est_en_attente(&self) -> bool {
        self.etat.est_en_attente()
    }

    pub fn programme(&self) -> &Programme {
        &self.programme
    }

    pub fn operations(&self) -> &TableOperations {
        &self.operations
    }

    /* ------------------------ Variables (rejeu à chaque changement) ------------------------ */

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn set_variable(&mut self, nom: &str, valeur: f64) {
        self.variables.lier(nom, valeur);
        self.rejouer();
    }

    pub fn remove_variable(&mut self, nom: &str) {
        if self.variables.delier(nom).is_some() {
            self.rejouer();
        }
    }

    pub fn set_variables(&mut self, variables: Variables) {
        self.variables = variables;
        self.rejouer();
    }

    /* ------------------------ Programme transféré ------------------------ */

    /// Remplace le programme par un programme reçu d’ailleurs, puis rejoue.
    pub fn load_programme(&mut self, programme: Programme) {
        self.programme = programme;
        self.rejouer();
    }

    fn rejouer(&mut self) {
        debug!("rejeu du programme [{}]", format_jetons(self.programme.jetons()));
        self.etat = rejouer(self.programme.jetons(), &self.operations, &self.variables);
        debug!("rejeu terminé : accumulateur {}", self.etat.accumulateur);
    }
}
