//! Tests de propriétés (campagne) : comportement observable du cerveau.
//!
//! Notes :
//! - La saisie “en direct” et le rejeu n’ont pas le même état intermédiaire :
//!   en direct, un nombre ne résout pas l’attente (il faut "=" ou une binaire),
//!   au rejeu, le nombre la résout. Les résultats finaux coïncident.
//! - Comparaisons f64 exactes : tous les cas restent dans des entiers / √ exactes.

use std::f64::consts::PI;

use super::cerveau::Cerveau;
use super::jetons::{Jeton, Programme};
use super::operations::TableOperations;
use super::rejeu::rejouer;
use super::variables::Variables;

fn cerveau_avec(entrees: &[&str]) -> Cerveau {
    let mut c = Cerveau::new();
    for e in entrees {
        saisir(&mut c, e);
    }
    c
}

/// Nombre => set_operand ; symbole de la table => opération ; sinon variable.
fn saisir(c: &mut Cerveau, entree: &str) {
    if let Ok(v) = entree.parse::<f64>() {
        c.set_operand(v);
    } else if c.operations().contient(entree) {
        c.perform_operation(entree);
    } else {
        c.set_operand_variable(entree);
    }
}

/* ------------------------ Propriétés de base ------------------------ */

#[test]
fn prop_gauche_droite_sans_priorite() {
    // 3 + 4 × 5 saisi dans cet ordre => (3+4)×5
    let c = cerveau_avec(&["3", "+", "4", "×", "5", "="]);
    assert_eq!(c.result(), 35.0);

    // même programme sans "=", rejoué : le dernier nombre résout l’attente
    let mut g = Cerveau::new();
    g.load_programme(cerveau_avec(&["3", "+", "4", "×", "5"]).programme().clone());
    assert_eq!(g.result(), 35.0);
}

#[test]
fn prop_unaire_enveloppe_la_description() {
    let c = cerveau_avec(&["9", "√"]);
    assert_eq!(c.description(), "√(9)");
    assert_eq!(c.result(), 3.0);
}

#[test]
fn prop_double_binaire_contre_soi_meme() {
    let c = cerveau_avec(&["5", "+", "+"]);
    assert_eq!(c.result(), 10.0);
}

#[test]
fn prop_constante_sans_operande() {
    let c = cerveau_avec(&["π"]);
    assert_eq!(c.result(), PI);
}

#[test]
fn prop_clear_remet_tout_a_zero() {
    let mut c = cerveau_avec(&["2", "×", "x", "+", "π", "cos", "=", "%"]);
    c.clear();
    assert_eq!(c.result(), 0.0);
    assert_eq!(c.description(), "");
    assert!(!c.est_en_attente());
    assert!(c.programme().is_empty());
}

/* ------------------------ Variables : mise à jour en direct ------------------------ */

#[test]
fn prop_variable_mise_a_jour_en_direct() {
    let mut c = Cerveau::new();
    c.set_variable("x", 3.0);
    for e in ["5", "+", "x"] {
        saisir(&mut c, e);
    }
    assert_eq!(c.result(), 8.0);

    c.set_variable("x", 10.0);
    assert_eq!(c.result(), 15.0);
    // programme intact
    assert_eq!(c.description(), "5+x");
    assert_eq!(c.programme().len(), 3);
}

#[test]
fn prop_variable_non_liee_vaut_zero() {
    let c = cerveau_avec(&["4", "×", "y", "="]);
    assert_eq!(c.result(), 0.0);
}

#[test]
fn prop_set_variables_remplace_tout() {
    let mut c = cerveau_avec(&["a", "+", "b"]);
    assert_eq!(c.result(), 0.0);
    c.set_variables([("a", 1.5), ("b", 2.5)].into_iter().collect());
    assert_eq!(c.result(), 4.0);
}

/* ------------------------ Undo ------------------------ */

#[test]
fn prop_undo_egal_rejeu_sans_le_dernier() {
    let entrees = ["6", "×", "x", "+", "9", "√", "÷", "2", "=", "cos", "e", "-", "1"];
    let mut vars = Variables::new();
    vars.lier("x", 7.0);

    // on construit progressivement puis on défait tout, un jeton à la fois
    let mut c = Cerveau::new();
    c.set_variables(vars.clone());
    for e in entrees {
        saisir(&mut c, e);
    }

    let table = TableOperations::default();
    while !c.programme().is_empty() {
        let mut attendu: Vec<Jeton> = c.programme().jetons().to_vec();
        attendu.pop();
        let etat = rejouer(&attendu, &table, &vars);

        c.undo();
        assert_eq!(c.programme().jetons(), attendu.as_slice());
        assert_eq!(c.result().to_bits(), etat.accumulateur.to_bits());
    }
    assert_eq!(c.result(), 0.0);
}

#[test]
fn prop_undo_puis_saisie() {
    let mut c = cerveau_avec(&["8", "+", "2"]);
    c.undo(); // retire 2 : rejeu [8 +] => en attente
    assert!(c.est_en_attente());
    saisir(&mut c, "5");
    saisir(&mut c, "=");
    assert_eq!(c.result(), 13.0);
    assert_eq!(c.description(), "8+5=");
}

/* ------------------------ Rejeu ------------------------ */

#[test]
fn prop_rejeu_deterministe() {
    let p: Programme = cerveau_avec(&["2", "×", "π", "cos", "+", "z", "÷", "4"])
        .programme()
        .clone();
    let table = TableOperations::default();
    let vars: Variables = [("z", 0.25)].into_iter().collect();

    let premier = rejouer(p.jetons(), &table, &vars).accumulateur;
    for _ in 0..10 {
        assert_eq!(rejouer(p.jetons(), &table, &vars).accumulateur.to_bits(), premier.to_bits());
    }
}

#[test]
fn prop_inconnu_en_direct_vs_rejeu() {
    // en direct : "%" est enregistré sans effet
    let mut c = cerveau_avec(&["7", "%"]);
    assert_eq!(c.result(), 7.0);

    // au rejeu : "%" est lu comme une variable (non liée => 0.0)
    c.set_variable("q", 1.0);
    assert_eq!(c.result(), 0.0);
}
