// src/noyau/implicite.rs
//
// Multiplication implicite : "2(3)" -> "2*(3)", "(1)(2)" -> "(1)*(2)", "(2)3" -> "(2)*3".
// Travaille sur les caractères bruts (pas sur les jetons) : "sqrt" ne doit jamais être coupé.

/// Insère un `*` entre deux caractères adjacents de la forme
/// chiffre-`(`, `)`-`(` ou `)`-chiffre. Rien n’est retiré ni réordonné.
pub fn inserer_multiplications(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);

        if let Some(&suivant) = chars.get(i + 1) {
            let implicite = (c.is_ascii_digit() && suivant == '(')
                || (c == ')' && suivant == '(')
                || (c == ')' && suivant.is_ascii_digit());
            if implicite {
                out.push('*');
            }
        }
    }

    out
}
