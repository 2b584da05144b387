//! src/app/etat.rs
//!
//! État de présentation (sans rendu).
//!
//! Rôle : tenir ce que l’écran montre (affichage, historique, erreur) et
//! traduire les “touches” en appels au cerveau.
//!
//! Contrats :
//! - Aucune logique de calcul ici : tout passe par noyau::Cerveau.
//! - Après chaque touche, affichage/historique sont relus depuis le cerveau.
//! - Saisie continue : tant qu’on tape des chiffres, le même nombre est réédité.

use std::ops::RangeInclusive;

use crate::noyau::echantillon::{echantillonner, Point, VARIABLE_GRAPHE};
use crate::noyau::{Cerveau, Programme, Variante};

/// Affichage au démarrage et après C / CE.
const AFFICHAGE_ZERO: &str = "0";

#[derive(Clone, Debug)]
pub struct AppCalc {
    cerveau: Cerveau,

    // --- sorties ---
    pub affichage: String,  // nombre en cours de saisie, ou dernier résultat
    pub historique: String, // description du programme
    pub erreur: String,     // dernière commande refusée (vide sinon)

    // --- graphe ---
    pub variable_graphe: String,
    pub courbe: Vec<Point>,

    // --- saisie ---
    en_saisie: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Variante::default(), VARIABLE_GRAPHE)
    }
}

impl AppCalc {
    pub fn new(variante: Variante, variable_graphe: impl Into<String>) -> Self {
        Self {
            cerveau: Cerveau::avec_variante(variante),
            affichage: AFFICHAGE_ZERO.to_string(),
            historique: String::new(),
            erreur: String::new(),
            variable_graphe: variable_graphe.into(),
            courbe: Vec::new(),
            en_saisie: false,
        }
    }

    pub fn cerveau(&self) -> &Cerveau {
        &self.cerveau
    }

    pub fn en_saisie(&self) -> bool {
        self.en_saisie
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou point décimal (un seul point par nombre).
    pub fn touche_chiffre(&mut self, c: char) {
        if c == '.' && self.en_saisie && self.affichage.contains('.') {
            return;
        }

        if self.en_saisie {
            self.affichage.push(c);
        } else {
            self.affichage = if c == '.' { "0.".to_string() } else { c.to_string() };
            self.en_saisie = true;
        }

        if let Ok(v) = self.affichage.parse::<f64>() {
            self.cerveau.set_operand(v);
        }
        self.maj_historique();
    }

    pub fn touche_operation(&mut self, symbole: &str) {
        self.cerveau.perform_operation(symbole);
        self.en_saisie = false;
        self.maj_affichage();
    }

    pub fn touche_variable(&mut self, nom: &str) {
        self.cerveau.set_operand_variable(nom);
        self.en_saisie = false;
        self.affichage = nom.to_string();
        self.maj_historique();
    }

    /// →nom : lie `nom` à la valeur affichée (rejeu immédiat).
    pub fn memoriser_variable(&mut self, nom: &str) {
        match self.affichage.parse::<f64>() {
            Ok(v) => {
                self.cerveau.set_variable(nom, v);
                self.en_saisie = false;
                self.maj_affichage();
            }
            Err(_) => self.set_erreur(format!("affichage non numérique: {}", self.affichage)),
        }
    }

    pub fn oublier_variable(&mut self, nom: &str) {
        self.cerveau.remove_variable(nom);
        self.en_saisie = false;
        self.maj_affichage();
    }

    /// C : efface seulement l’affichage (le programme reste).
    pub fn effacer_affichage(&mut self) {
        self.affichage = AFFICHAGE_ZERO.to_string();
        self.en_saisie = false;
    }

    /// CE : remise à zéro du cerveau + affichage.
    pub fn effacer_tout(&mut self) {
        self.cerveau.clear();
        self.effacer_affichage();
        self.courbe.clear();
        self.maj_historique();
    }

    pub fn annuler(&mut self) {
        self.cerveau.undo();
        self.en_saisie = false;
        self.maj_affichage();
    }

    /* ------------------------ Programme / graphe ------------------------ */

    pub fn charger_programme(&mut self, programme: Programme) {
        self.cerveau.load_programme(programme);
        self.en_saisie = false;
        self.maj_affichage();
    }

    /// Échantillonne le programme courant sur la variable libre.
    /// `nom` None => variable de graphe configurée.
    pub fn graphe(&mut self, nom: Option<&str>, plage: RangeInclusive<f64>, n: usize) {
        let nom = nom.unwrap_or(&self.variable_graphe);
        self.courbe = echantillonner(
            self.cerveau.programme(),
            self.cerveau.operations(),
            self.cerveau.variables(),
            nom,
            plage,
            n,
        );
        self.erreur.clear();
    }

    /* ------------------------ Utilitaires ------------------------ */

    /// Choix UX : on CONSERVE affichage/historique, seule l’erreur change.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
    }

    fn maj_affichage(&mut self) {
        self.affichage = self.cerveau.result().to_string();
        self.maj_historique();
    }

    fn maj_historique(&mut self) {
        self.historique = self.cerveau.description();
        self.erreur.clear();
    }
}
