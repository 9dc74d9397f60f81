// src/noyau/format.rs

/// Décimales conservées avant élagage des zéros de queue.
///
/// Borne d'arrondi volontairement documentée : l'affichage est une lecture
/// flottante arrondie, pas de l'arithmétique décimale exacte. Elle masque
/// les artefacts binaires classiques (0.1 + 0.2 doit se lire "0.3").
pub const DECIMALES_AFFICHAGE: usize = 10;

/// Formate un résultat pour l'affichage.
///
/// - valeur entière : pas de partie fractionnaire ("3", jamais "3.0")
/// - sinon : 10 décimales fixes, puis zéros de queue (et point final) élagués
/// - zéro signé normalisé en "0"
pub fn format_valeur(v: f64) -> String {
    if v == 0.0 {
        // couvre aussi -0.0 (égal à 0.0 en flottant)
        return "0".to_string();
    }
    if v.fract() == 0.0 {
        return format!("{v}");
    }

    let texte = format!("{v:.prec$}", prec = DECIMALES_AFFICHAGE);
    texte.trim_end_matches('0').trim_end_matches('.').to_string()
}
