//! Noyau — évaluateur enchaîné (machine à jetons)
//!
//! Quatre états logiques :
//! - Saisie          : on tape un opérande, aucun opérateur en attente
//! - OperateurAttente: un opérateur est posé, on tape l'opérande suivant
//! - Resultat        : `=` vient de produire une valeur (vient_de_calculer)
//! - Erreur          : l'affichage vaut "Error", la chaîne est terminée
//!
//! Le repli est strictement gauche-à-droite : chaque opérateur replie
//! immédiatement l'opération en attente dès qu'un second opérande existe.
//! Pas de priorité des opérateurs, pas de parenthèses.

use thiserror::Error;

use super::format::format_valeur;
use super::jetons::{Jeton, Op};

/// Valeur d'affichage terminale après une division par zéro.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Seule erreur arithmétique du domaine : l'alphabet d'entrée étant fermé,
/// aucun jeton malformé n'existe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,
}

/// Règle de calcul pure, hors état.
///
/// `÷` échoue si (et seulement si) l'opérande droit vaut exactement 0
/// au moment du repli.
pub fn appliquer_op(prec: f64, courant: f64, op: Op) -> Result<f64, ErreurCalcul> {
    match op {
        Op::Plus => Ok(prec + courant),
        Op::Moins => Ok(prec - courant),
        Op::Fois => Ok(prec * courant),
        Op::Divise => {
            if courant == 0.0 {
                Err(ErreurCalcul::DivisionParZero)
            } else {
                Ok(prec / courant)
            }
        }
    }
}

/// État complet de la calculatrice, muté seulement par les opérations
/// ci-dessous. La vue ne lit que les deux projections `affichage()` et
/// `historique()`.
///
/// Invariants :
/// - `op_en_attente` et `precedente` sont présents ensemble ou absents ensemble
/// - `entree` est un littéral décimal valide en cours de saisie
///   (au plus un point, pas de zéro de tête redondant), ou "Error"
/// - `trace` ne porte jamais plus d'un suffixe "… = …"
#[derive(Clone, Debug)]
pub struct Evaluateur {
    pub(crate) entree: String,
    pub(crate) trace: String,
    pub(crate) precedente: Option<f64>,
    pub(crate) op_en_attente: Option<Op>,
    pub(crate) vient_de_calculer: bool,
}

impl Default for Evaluateur {
    fn default() -> Self {
        Self {
            entree: "0".to_string(),
            trace: String::new(),
            precedente: None,
            op_en_attente: None,
            vient_de_calculer: false,
        }
    }
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Projections (vue) ------------------------ */

    /// Valeur courante à afficher telle quelle.
    pub fn affichage(&self) -> &str {
        &self.entree
    }

    /// Historique lisible de la chaîne ("3 + 4 × ").
    pub fn historique(&self) -> &str {
        &self.trace
    }

    /// Vrai quand la chaîne s'est terminée sur une division par zéro.
    pub fn en_erreur(&self) -> bool {
        self.entree == AFFICHAGE_ERREUR
    }

    /* ------------------------ Dispatch ------------------------ */

    /// Applique un jeton. Une frappe = un appel, jamais ré-entrant.
    pub fn appliquer(&mut self, jeton: Jeton) {
        match jeton {
            Jeton::Chiffre(d) => self.chiffre(d),
            Jeton::Point => self.point_decimal(),
            Jeton::Operateur(op) => self.operateur(op),
            Jeton::Egal => self.egal(),
            Jeton::Effacer => self.reinitialiser(),
            Jeton::EffacerEntree => self.effacer_entree(),
            Jeton::RetourArriere => self.retour_arriere(),
        }
    }

    /* ------------------------ Effacements ------------------------ */

    /// C : retour à l'état initial (entrée "0", trace vide, rien en attente).
    pub fn reinitialiser(&mut self) {
        *self = Self::default();
    }

    /// CE : efface seulement l'entrée en cours ; trace et opération en
    /// attente restent telles quelles.
    pub fn effacer_entree(&mut self) {
        self.entree = "0".to_string();
    }

    /// DEL : retire le dernier caractère.
    ///
    /// Un résultat (ou "Error") est terminal : effacer dedans repart de zéro.
    pub fn retour_arriere(&mut self) {
        if self.vient_de_calculer || self.en_erreur() {
            self.reinitialiser();
            return;
        }
        self.entree.pop();
        if self.entree.is_empty() {
            self.entree.push('0');
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// Ajoute un chiffre à l'opérande en cours.
    ///
    /// Taper un chiffre juste après `=` (ou sur "Error") démarre une chaîne
    /// neuve. Un "0" seul est remplacé, jamais préfixé.
    pub fn chiffre(&mut self, d: u8) {
        debug_assert!(d <= 9, "chiffre hors alphabet: {d}");
        if self.vient_de_calculer || self.en_erreur() {
            self.reinitialiser();
        }
        if self.entree == "0" {
            self.entree.clear();
        }
        self.entree.push(char::from(b'0' + d));
    }

    /// Ajoute le point décimal, au plus un par opérande ("0" devient "0.").
    pub fn point_decimal(&mut self) {
        if self.vient_de_calculer || self.en_erreur() {
            self.reinitialiser();
        }
        if !self.entree.contains('.') {
            self.entree.push('.');
        }
    }

    /* ------------------------ Opérateurs ------------------------ */

    /// Pose un opérateur, dans cet ordre de priorité :
    ///
    /// 1. juste après `=` : la chaîne repart du résultat affiché
    ///    (trace redémarrée, pas de remise à zéro)
    /// 2. opérateur déjà en attente ET second opérande saisi :
    ///    repli immédiat, le résultat devient l'opérande gauche
    /// 3. sinon : capture de l'opérande gauche
    ///    (un opérateur re-pressé avant toute saisie repasse ici)
    pub fn operateur(&mut self, op: Op) {
        if self.en_erreur() {
            return;
        }

        if self.vient_de_calculer {
            self.precedente = Some(self.valeur_courante());
            self.op_en_attente = Some(op);
            self.trace = format!("{} {} ", self.entree, op.glyphe());
            self.entree = "0".to_string();
            self.vient_de_calculer = false;
            return;
        }

        match (self.precedente, self.op_en_attente) {
            (Some(gauche), Some(en_attente)) if self.entree != "0" => {
                match appliquer_op(gauche, self.valeur_courante(), en_attente) {
                    Ok(resultat) => {
                        self.trace.push_str(&self.entree);
                        self.trace.push(' ');
                        self.trace.push_str(op.glyphe());
                        self.trace.push(' ');
                        self.precedente = Some(resultat);
                        self.op_en_attente = Some(op);
                        self.entree = "0".to_string();
                    }
                    Err(ErreurCalcul::DivisionParZero) => self.terminer_en_erreur(),
                }
            }
            _ => {
                self.precedente = Some(self.valeur_courante());
                self.trace.push_str(&self.entree);
                self.trace.push(' ');
                self.trace.push_str(op.glyphe());
                self.trace.push(' ');
                self.op_en_attente = Some(op);
                self.entree = "0".to_string();
            }
        }
    }

    /* ------------------------ Égal ------------------------ */

    /// Replie l'opération en attente. Sans opérateur posé : aucun effet.
    pub fn egal(&mut self) {
        if self.en_erreur() {
            return;
        }
        let (Some(gauche), Some(op)) = (self.precedente, self.op_en_attente) else {
            return;
        };

        match appliquer_op(gauche, self.valeur_courante(), op) {
            Ok(resultat) => {
                let texte = format_valeur(resultat);
                self.trace.push_str(&self.entree);
                self.trace.push_str(" = ");
                self.trace.push_str(&texte);
                self.entree = texte;
                self.precedente = None;
                self.op_en_attente = None;
                self.vient_de_calculer = true;
            }
            Err(ErreurCalcul::DivisionParZero) => self.terminer_en_erreur(),
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Termine la chaîne sur "Error". Une erreur n'est PAS un calcul
    /// terminé : `vient_de_calculer` reste faux, on ne peut pas enchaîner
    /// un opérateur dessus.
    fn terminer_en_erreur(&mut self) {
        self.trace.push_str(&self.entree);
        self.trace.push_str(" = ");
        self.trace.push_str(AFFICHAGE_ERREUR);
        self.entree = AFFICHAGE_ERREUR.to_string();
        self.precedente = None;
        self.op_en_attente = None;
        self.vient_de_calculer = false;
    }

    /// Lit l'opérande en cours. `entree` est un littéral décimal valide par
    /// invariant (les chemins "Error" sortent avant), donc le repli 0.0 est
    /// inatteignable.
    fn valeur_courante(&self) -> f64 {
        self.entree.parse::<f64>().unwrap_or(0.0)
    }
}
