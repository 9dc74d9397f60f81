//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la machine à jetons sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - longueur de flux bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE jeton :
//!   - affichage = "Error" ou littéral décimal valide (un seul point,
//!     pas de zéro de tête redondant)
//!   - opérande gauche et opérateur en attente présents ensemble
//!   - en erreur : plus rien en attente, pas de "calcul terminé"
//!   - trace : au plus un suffixe "… = …"

use std::time::{Duration, Instant};

use super::eval::Evaluateur;
use super::jetons::{Jeton, Op};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de jetons (pondérée) ------------------------ */

fn gen_jeton(rng: &mut Rng) -> Jeton {
    // chiffres majoritaires, contrôles rares : on veut des chaînes qui
    // avancent, pas un marteau sur C
    match rng.pick(20) {
        0..=9 => Jeton::Chiffre(rng.pick(10) as u8),
        10 | 11 => Jeton::Point,
        12 => Jeton::Operateur(Op::Plus),
        13 => Jeton::Operateur(Op::Moins),
        14 => Jeton::Operateur(Op::Fois),
        15 => Jeton::Operateur(Op::Divise),
        16 | 17 => Jeton::Egal,
        18 => Jeton::RetourArriere,
        _ => {
            if rng.pick(4) == 0 {
                Jeton::Effacer
            } else {
                Jeton::EffacerEntree
            }
        }
    }
}

/* ------------------------ Invariants ------------------------ */

fn check_affichage(ev: &Evaluateur, contexte: &str) {
    let texte = ev.affichage();
    if ev.en_erreur() {
        assert_eq!(texte, "Error", "{contexte}");
        return;
    }

    assert!(!texte.is_empty(), "{contexte}: affichage vide");
    assert!(
        texte.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "{contexte}: caractère inattendu dans {texte:?}"
    );
    assert!(
        texte.matches('.').count() <= 1,
        "{contexte}: plusieurs points dans {texte:?}"
    );
    if texte.len() > 1 && texte.starts_with('0') {
        assert!(
            texte.as_bytes()[1] == b'.',
            "{contexte}: zéro de tête redondant dans {texte:?}"
        );
    }
    assert!(
        texte.parse::<f64>().is_ok(),
        "{contexte}: affichage non lisible en f64: {texte:?}"
    );
}

fn check_etat(ev: &Evaluateur, contexte: &str) {
    check_affichage(ev, contexte);

    assert_eq!(
        ev.precedente.is_some(),
        ev.op_en_attente.is_some(),
        "{contexte}: opérande gauche et opérateur désynchronisés"
    );

    if ev.en_erreur() {
        assert!(ev.precedente.is_none(), "{contexte}: opérande gauche en erreur");
        assert!(
            !ev.vient_de_calculer,
            "{contexte}: erreur comptée comme calcul terminé"
        );
    }

    if ev.vient_de_calculer {
        assert!(
            ev.op_en_attente.is_none(),
            "{contexte}: opérateur en attente après ="
        );
    }

    assert!(
        ev.historique().matches('=').count() <= 1,
        "{contexte}: plusieurs suffixes = dans {:?}",
        ev.historique()
    );
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_sur_flux_aleatoires() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut vus_erreur = 0usize;
    let mut vus_resultat = 0usize;

    for campagne in 0..40 {
        budget(t0, max);

        let mut ev = Evaluateur::new();
        for pas in 0..200 {
            let jeton = gen_jeton(&mut rng);
            ev.appliquer(jeton);
            check_etat(&ev, &format!("campagne={campagne} pas={pas} jeton={jeton:?}"));

            if ev.en_erreur() {
                vus_erreur += 1;
                // seul C/CE fait sortir de l'erreur côté noyau pour les
                // contrôles ; on repart proprement
                ev.appliquer(Jeton::Effacer);
            }
            if ev.vient_de_calculer {
                vus_resultat += 1;
            }
        }
    }

    // le fuzz doit balayer les deux issues, sinon il ne teste rien
    assert!(vus_resultat > 20, "trop peu de résultats: {vus_resultat}");
    assert!(vus_erreur > 0, "aucune division par zéro rencontrée");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let rejouer = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut ev = Evaluateur::new();
        for _ in 0..500 {
            ev.appliquer(gen_jeton(&mut rng));
        }
        (ev.affichage().to_string(), ev.historique().to_string())
    };

    // même seed => même flux => même état final
    let a = rejouer(0xBADC0DE_u64);
    budget(t0, max);
    let b = rejouer(0xBADC0DE_u64);
    assert_eq!(a, b, "flux identique, états finaux différents");
}

#[test]
fn fuzz_safe_longue_saisie_sans_operateur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // 400 chiffres d'affilée : la saisie reste un littéral valide,
    // aucun repli n'a lieu
    let mut rng = Rng::new(0xFEED_u64);
    let mut ev = Evaluateur::new();
    for _ in 0..400 {
        ev.appliquer(Jeton::Chiffre(rng.pick(10) as u8));
    }
    budget(t0, max);

    check_etat(&ev, "longue saisie");
    assert!(ev.op_en_attente.is_none());
    assert!(ev.historique().is_empty());
}
