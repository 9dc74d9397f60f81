//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l'évaluateur et offrir UN SEUL point d'entrée des jetons
//! (boutons + clavier), qui applique la règle de la frontière : en affichage
//! "Error", seuls les effacements sont transmis au noyau.
//!
//! Contrats :
//! - Aucun rendu ici (la vue lit les deux projections du noyau).
//! - Une frappe = un jeton = un appel, jamais ré-entrant.
//! - La suppression des jetons en erreur se fait ICI, pas dans le noyau.

use crate::noyau::{Evaluateur, Jeton};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub evaluateur: Evaluateur,
}

impl AppCalc {
    /// Point d'entrée unique des jetons.
    ///
    /// En état d'erreur, tout sauf C/CE est avalé : la seule sortie de
    /// "Error" offerte à l'utilisateur est un effacement explicite.
    pub fn jeton(&mut self, jeton: Jeton) {
        if self.evaluateur.en_erreur()
            && !matches!(jeton, Jeton::Effacer | Jeton::EffacerEntree)
        {
            tracing::debug!(?jeton, "jeton ignoré en état d'erreur");
            return;
        }

        let etait_en_erreur = self.evaluateur.en_erreur();
        self.evaluateur.appliquer(jeton);

        if !etait_en_erreur && self.evaluateur.en_erreur() {
            tracing::warn!(
                historique = self.evaluateur.historique(),
                "division par zéro, chaîne terminée"
            );
        }
    }
}
