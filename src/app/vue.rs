// src/app/vue.rs
//
// Vue (terminal)
// --------------
// Objectifs :
// - Une ligne = une suite de “touches” séparées par des espaces
// - Chiffres : saisie continue (12 puis 3 => 123 tant qu’aucune opération n’intervient)
// - Alias clavier : * / pi sqrt
// - Méta-commandes préfixées par ':' (graphe, export/import JSON, aide, quitter)
//
// Note :
// - Un symbole inconnu n’est PAS une erreur : il part au cerveau (enregistré, sans effet).
// - Les erreurs ne concernent que la forme des commandes ; elles vont dans `erreur`.

use log::debug;
use thiserror::Error;

use super::etat::AppCalc;
use crate::noyau::echantillon::ECHANTILLONS_MAX;
use crate::noyau::Programme;

#[derive(Debug, Error)]
pub enum ErreurCommande {
    #[error("commande inconnue: :{0} (voir :aide)")]
    MetaInconnue(String),

    #[error("argument manquant: {0}")]
    ArgumentManquant(&'static str),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("trop d’échantillons: {0} (maximum {max})", max = ECHANTILLONS_MAX)]
    TropDEchantillons(usize),

    #[error("nom de variable vide après →")]
    NomVide,

    #[error("programme JSON invalide: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ce que la boucle principale doit faire après une ligne.
#[derive(Clone, Debug, PartialEq)]
pub enum Sortie {
    Ecran(String),
    Quitter,
}

#[derive(Clone, Debug, PartialEq)]
enum Commande {
    Chiffres(String),
    Operation(String),
    Variable(String),
    Memoriser(String),
    EffacerAffichage,
    EffacerTout,
    Annuler,
}

impl AppCalc {
    /// Traite une ligne complète et rend l’écran (ou demande l’arrêt).
    pub fn traiter_ligne(&mut self, ligne: &str) -> Sortie {
        let ligne = ligne.trim();

        if let Some(meta) = ligne.strip_prefix(':') {
            return match self.meta_commande(meta) {
                Ok(Some(texte)) => Sortie::Ecran(texte),
                Ok(None) => Sortie::Quitter,
                Err(e) => {
                    self.set_erreur(e.to_string());
                    Sortie::Ecran(self.rendu())
                }
            };
        }

        for mot in ligne.split_whitespace() {
            match self.lire_commande(mot) {
                Ok(cmd) => self.appliquer(cmd),
                Err(e) => {
                    // on s’arrête au premier mot fautif (la suite n’a plus de sens)
                    self.set_erreur(e.to_string());
                    break;
                }
            }
        }

        Sortie::Ecran(self.rendu())
    }

    /// Écran : historique + affichage (+ erreur si présente).
    pub fn rendu(&self) -> String {
        let mut out = format!("{}\n= {}", self.historique, self.affichage);
        if !self.erreur.is_empty() {
            out.push_str("\n! ");
            out.push_str(&self.erreur);
        }
        out
    }

    fn lire_commande(&self, mot: &str) -> Result<Commande, ErreurCommande> {
        let cmd = match mot {
            "C" => Commande::EffacerAffichage,
            "CE" => Commande::EffacerTout,
            "undo" | "↵" => Commande::Annuler,
            _ => {
                if let Some(nom) = mot.strip_prefix("->").or_else(|| mot.strip_prefix('→')) {
                    if nom.is_empty() {
                        return Err(ErreurCommande::NomVide);
                    }
                    Commande::Memoriser(nom.to_string())
                } else if mot.chars().all(|c| c.is_ascii_digit() || c == '.') {
                    Commande::Chiffres(mot.to_string())
                } else {
                    let symbole = alias(mot);
                    if self.cerveau().operations().contient(symbole) || !est_identifiant(symbole) {
                        Commande::Operation(symbole.to_string())
                    } else {
                        Commande::Variable(symbole.to_string())
                    }
                }
            }
        };
        Ok(cmd)
    }

    fn appliquer(&mut self, cmd: Commande) {
        debug!("commande {cmd:?}");
        match cmd {
            Commande::Chiffres(chiffres) => {
                for c in chiffres.chars() {
                    self.touche_chiffre(c);
                }
            }
            Commande::Operation(s) => self.touche_operation(&s),
            Commande::Variable(nom) => self.touche_variable(&nom),
            Commande::Memoriser(nom) => self.memoriser_variable(&nom),
            Commande::EffacerAffichage => self.effacer_affichage(),
            Commande::EffacerTout => self.effacer_tout(),
            Commande::Annuler => self.annuler(),
        }
    }

    /// Ok(None) => quitter.
    fn meta_commande(&mut self, meta: &str) -> Result<Option<String>, ErreurCommande> {
        let (nom, reste) = match meta.split_once(char::is_whitespace) {
            Some((n, r)) => (n, r.trim()),
            None => (meta.trim(), ""),
        };

        match nom {
            "q" | "quitter" => Ok(None),
            "aide" => Ok(Some(self.aide())),
            "export" => Ok(Some(serde_json::to_string(self.cerveau().programme())?)),
            "import" => {
                if reste.is_empty() {
                    return Err(ErreurCommande::ArgumentManquant("programme JSON"));
                }
                let programme: Programme = serde_json::from_str(reste)?;
                self.charger_programme(programme);
                Ok(Some(self.rendu()))
            }
            "oublier" => {
                if reste.is_empty() {
                    return Err(ErreurCommande::ArgumentManquant("nom de variable"));
                }
                self.oublier_variable(reste);
                Ok(Some(self.rendu()))
            }
            "variables" => {
                let lignes: Vec<String> = self
                    .cerveau()
                    .variables()
                    .iter()
                    .map(|(k, v)| format!("{k} = {v}"))
                    .collect();
                Ok(Some(lignes.join("\n")))
            }
            "graphe" => {
                self.meta_graphe(reste)?;
                let lignes: Vec<String> = self
                    .courbe
                    .iter()
                    .map(|p| format!("{}\t{}", p.x, p.y))
                    .collect();
                Ok(Some(lignes.join("\n")))
            }
            autre => Err(ErreurCommande::MetaInconnue(autre.to_string())),
        }
    }

    /// :graphe [var] debut fin n
    fn meta_graphe(&mut self, args: &str) -> Result<(), ErreurCommande> {
        let mots: Vec<&str> = args.split_whitespace().collect();
        let (var, nums) = match mots.as_slice() {
            [v, reste @ ..] if reste.len() == 3 => (Some(*v), reste),
            reste => (None, reste),
        };

        let [debut, fin, n] = nums else {
            return Err(ErreurCommande::ArgumentManquant("debut fin n"));
        };
        let debut = lire_f64(debut)?;
        let fin = lire_f64(fin)?;
        let n: usize = n
            .parse()
            .map_err(|_| ErreurCommande::NombreInvalide(n.to_string()))?;
        if n > ECHANTILLONS_MAX {
            return Err(ErreurCommande::TropDEchantillons(n));
        }

        self.graphe(var, debut..=fin, n);
        Ok(())
    }

    fn aide(&self) -> String {
        let symboles = self.cerveau().operations().symboles().join(" ");
        format!(
            "chiffres: 0-9 .   opérations: {symboles}\n\
             alias: * / pi sqrt   variables: tout identifiant (ex: x, M)\n\
             →x ou ->x : lie x à l’affichage   C  CE  undo\n\
             :graphe [var] debut fin n   :export   :import <json>   :variables   :oublier <nom>   :quitter"
        )
    }
}

fn alias(mot: &str) -> &str {
    match mot {
        "*" => "×",
        "/" => "÷",
        "pi" => "π",
        "sqrt" => "√",
        _ => mot,
    }
}

fn est_identifiant(mot: &str) -> bool {
    let mut chars = mot.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn lire_f64(s: &str) -> Result<f64, ErreurCommande> {
    s.parse()
        .map_err(|_| ErreurCommande::NombreInvalide(s.to_string()))
}
