//! Noyau du calcul enchaîné
//!
//! Organisation interne :
//! - jetons.rs  : alphabet d'entrée fermé (chiffres, point, opérateurs, contrôles)
//! - eval.rs    : machine à états (saisie, opérateur en attente, résultat, erreur)
//! - format.rs  : lecture décimale des résultats (entiers nus, arrondi 10 décimales)
//!
//! Le noyau est pur : pas d'UI, pas de journalisation, une frappe = un appel.

pub mod eval;
pub mod format;
pub mod jetons;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::Evaluateur;
pub use jetons::{Jeton, Op};
