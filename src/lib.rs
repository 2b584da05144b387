//! Cerveau de calculatrice à rejeu.
//!
//! - `noyau` : programme de jetons, rejeu pur, undo, variables en direct, description
//! - `app`   : état de présentation + vue terminal (utilisés par le binaire)

pub mod app;
pub mod noyau;
