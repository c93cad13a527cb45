// src/noyau/jetons.rs

use super::erreur::ErrorKind;

/// Opérateurs binaires (tous associatifs à gauche).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    /// Précédence (plus haut = lie plus fort).
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
            Operateur::Puissance => 3,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Puissance => '^',
        }
    }
}

/// Fonctions préfixes unaires.
///
/// `Oppose` (moins unaire) n’est jamais produit par le tokenizer :
/// c’est le parseur qui reclasse un `-` placé là où une valeur est attendue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Racine,
    Oppose,
}

impl Fonction {
    /// `sqrt` lie plus fort que tout opérateur binaire.
    /// Le moins unaire se place sous `^` : "-2^2" vaut -4.
    pub fn precedence(self) -> u8 {
        match self {
            Fonction::Racine => 4,
            Fonction::Oppose => 2,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Racine => "sqrt",
            Fonction::Oppose => "neg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Texte décimal tel qu’écrit (chiffres et '.'), converti à l’évaluation.
    Num(String),
    Op(Operateur),
    Fonction(Fonction),
    LPar,
    RPar,
}

const NOM_RACINE: [char; 4] = ['s', 'q', 'r', 't'];

/// Tokenize un texte déjà prétraité (symboles normalisés, multiplications insérées).
///
/// - chiffres et '.' consécutifs -> un seul `Num`
/// - "sqrt" -> `Fonction(Racine)` (les 4 caractères d’un coup)
/// - `+ - * / ^ ( )` -> jeton correspondant
/// - tout autre caractère (espaces compris) -> `LexicalError`
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErrorKind> {
    let mut out = Vec::new();
    let mut nombre = String::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            i += 1;
            continue;
        }

        // Tout autre caractère termine le nombre en cours.
        if !nombre.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut nombre)));
        }

        if chars[i..].starts_with(&NOM_RACINE) {
            out.push(Tok::Fonction(Fonction::Racine));
            i += NOM_RACINE.len();
            continue;
        }

        let tok = match c {
            '+' => Tok::Op(Operateur::Plus),
            '-' => Tok::Op(Operateur::Moins),
            '*' => Tok::Op(Operateur::Fois),
            '/' => Tok::Op(Operateur::Divise),
            '^' => Tok::Op(Operateur::Puissance),
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => return Err(ErrorKind::LexicalError(c)),
        };
        out.push(tok);
        i += 1;
    }

    // nombre en fin de saisie
    if !nombre.is_empty() {
        out.push(Tok::Num(nombre));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Fonction(f) => f.nom().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
