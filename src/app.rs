// src/app.rs
//
// Cerveau de calculatrice — module App (racine)
// ---------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir la boucle de session (lignes lues -> écran rendu)
//
// Important:
// - L’analyse des lignes est faite dans vue.rs ; ici on ne fait que boucler.

pub mod etat;
pub mod vue;

use std::io::{self, BufRead, Write};

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;
pub use vue::Sortie;

impl AppCalc {
    /// Boucle de session : une ligne lue, un écran écrit, jusqu’à :quitter ou fin d’entrée.
    pub fn boucle<R: BufRead, W: Write>(&mut self, entree: R, mut sortie: W) -> io::Result<()> {
        for ligne in entree.lines() {
            let ligne = ligne?;
            if ligne.trim().is_empty() {
                continue;
            }
            match self.traiter_ligne(&ligne) {
                Sortie::Ecran(ecran) => writeln!(sortie, "{ecran}")?,
                Sortie::Quitter => break,
            }
            sortie.flush()?;
        }
        Ok(())
    }
}
