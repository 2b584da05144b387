//! Noyau : cerveau de calculatrice à rejeu
//!
//! Organisation interne :
//! - jetons.rs      : Jeton (Nombre / Symbole) + Programme
//! - operations.rs  : table symbole -> opération (variantes du "-")
//! - variables.rs   : liaisons nom -> valeur (0.0 par défaut)
//! - rejeu.rs       : rejeu pur (programme, variables) -> état
//! - description.rs : description infixe (pli gauche -> droite)
//! - cerveau.rs     : moteur (saisie, undo, variables en direct)
//! - echantillon.rs : programme vu comme fonction d’une variable

pub mod cerveau;
pub mod description;
pub mod echantillon;
pub mod jetons;
pub mod operations;
pub mod rejeu;
pub mod variables;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use cerveau::Cerveau;
pub use jetons::{Jeton, Programme};
pub use operations::Variante;
