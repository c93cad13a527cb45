// src/noyau/symboles.rs
//
// Glyphes d’affichage -> symboles de calcul.
// Doit passer AVANT l’insertion des multiplications implicites :
// celle-ci ne reconnaît que les chiffres et les parenthèses ASCII.

/// Table glyphe -> forme canonique.
const GLYPHES: [(char, &str); 4] = [('×', "*"), ('÷', "/"), ('√', "sqrt"), ('²', "^2")];

/// Remplace les glyphes d’affichage (×, ÷, √, ²) par leur forme calculable.
/// Fonction totale : les autres caractères passent tels quels.
pub fn normaliser(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match GLYPHES.iter().find(|(g, _)| *g == c) {
            Some((_, canon)) => out.push_str(canon),
            None => out.push(c),
        }
    }
    out
}
