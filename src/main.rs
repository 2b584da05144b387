// src/main.rs
//
// Cerveau de calculatrice — point d’entrée (terminal)
// ---------------------------------------------------
// But:
// - Options (clap)         : variante du "-", variable de graphe, ligne unique
// - Journalisation         : env_logger, niveau via RUST_LOG (ex: RUST_LOG=debug)
// - Session                : stdin -> AppCalc -> stdout
//
// Exemples :
//   cerveau_calc -c "3 + 4 * 5 ="
//   RUST_LOG=trace cerveau_calc --variante historique

use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;

use cerveau_calc::app::{AppCalc, Sortie};
use cerveau_calc::noyau::echantillon::VARIABLE_GRAPHE;
use cerveau_calc::noyau::Variante;

/// Calculatrice à rejeu : programme de jetons, undo, variables en direct.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Table d’opérations : "corrigee" ("-" soustrait) ou "historique" ("-" additionne)
    #[arg(long, value_enum, default_value_t = Variante::Corrigee)]
    variante: Variante,

    /// Variable libre utilisée par :graphe quand aucune n’est donnée
    #[arg(long, default_value = VARIABLE_GRAPHE)]
    variable_graphe: String,

    /// Exécute une seule ligne puis quitte (sinon : session interactive sur stdin)
    #[arg(short, long)]
    commandes: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();
    info!(
        "démarrage : variante {:?}, variable de graphe {}",
        options.variante, options.variable_graphe
    );

    let mut app = AppCalc::new(options.variante, options.variable_graphe);

    if let Some(ligne) = options.commandes {
        if let Sortie::Ecran(ecran) = app.traiter_ligne(&ligne) {
            println!("{ecran}");
        }
        return Ok(());
    }

    let stdin = io::stdin();
    app.boucle(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
