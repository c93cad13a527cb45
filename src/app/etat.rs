//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir la session de la calculatrice (entrée, dernier résultat, erreur, démarche)
//! et offrir les actions “clavier” qui ne demandent aucune évaluation.
//! Les actions qui passent par le noyau vivent dans commandes.rs.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes ; le temps est fourni par l’appelant (secondes egui).
//! - Le noyau ne garde rien : c’est ICI que vit la “mémoire” (dernier résultat).

/// Délai avant effacement automatique d’une erreur (secondes).
pub const DELAI_EFFACEMENT_ERREUR_S: f64 = 2.0;

/// Valeur affichée au démarrage et après C.
const RESULTAT_INITIAL: &str = "0";

/// Opérateurs reconnus en fin de saisie (remplacement / découpage du nombre courant).
pub(crate) fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^' | '×' | '÷')
}

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

/// Erreur en cours d’affichage, avec l’instant où elle a été levée.
#[derive(Clone, Debug)]
pub struct ErreurAffichee {
    pub message: String,
    pub depuis: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub dernier_resultat: String, // aperçu ou résultat validé
    pub resultat_affiche: bool,   // true juste après "=" (ou %, √ sur résultat)
    pub erreur: Option<ErreurAffichee>,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            dernier_resultat: RESULTAT_INITIAL.to_string(),
            resultat_affiche: false,
            erreur: None,
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }

    /// Texte du grand afficheur.
    pub fn affichage(&self) -> &str {
        if self.en_erreur() {
            "Erreur"
        } else {
            &self.dernier_resultat
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// C : remise à zéro totale (entrée + résultat + erreur).
    pub fn effacer_tout(&mut self) {
        self.entree.clear();
        self.dernier_resultat = RESULTAT_INITIAL.to_string();
        self.resultat_affiche = false;
        self.erreur = None;
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Reprend le dernier résultat comme début de l’entrée (enchaînement).
    fn reprendre_resultat(&mut self) {
        if self.resultat_affiche {
            self.entree = self.dernier_resultat.clone();
            self.resultat_affiche = false;
        }
    }

    /// DEL : en erreur => tout effacer ; sinon retire le dernier caractère.
    pub fn effacer_dernier(&mut self) {
        if self.en_erreur() {
            self.effacer_tout();
            return;
        }
        self.reprendre_resultat();
        self.entree.pop();
        self.focus_entree = true;
    }

    /// Chiffre : un résultat affiché est remplacé par une nouvelle saisie.
    pub fn saisir_chiffre(&mut self, c: char) {
        if self.en_erreur() {
            self.effacer_tout();
        }
        if self.resultat_affiche {
            self.entree.clear();
            self.resultat_affiche = false;
        }
        self.entree.push(c);
        self.focus_entree = true;
    }

    /// Point décimal : au plus un par nombre ; "0." si le nombre courant est vide.
    pub fn saisir_point(&mut self) {
        if self.en_erreur() {
            self.effacer_tout();
        }
        if self.resultat_affiche {
            self.entree = "0".to_string();
            self.resultat_affiche = false;
        }

        // nombre courant = texte après le dernier opérateur
        let courant = self.entree.rsplit(est_operateur).next().unwrap_or("");
        let deja_decimal = courant.contains('.');
        let vide = courant.is_empty();

        if !deja_decimal {
            self.entree.push_str(if vide { "0." } else { "." });
        }
        self.focus_entree = true;
    }

    /// + - × ÷ : remplace un opérateur final ; seul '-' peut ouvrir une saisie vide.
    pub fn saisir_operateur(&mut self, op: char) {
        if self.en_erreur() {
            return;
        }
        self.reprendre_resultat();

        if self.entree.is_empty() {
            if op == '-' {
                self.entree.push('-');
            }
            return;
        }

        if self.entree.ends_with(est_operateur) {
            self.entree.pop();
        }
        self.entree.push(op);
        self.focus_entree = true;
    }

    /// x² : ajoute le glyphe ² (sur le résultat affiché s’il y en a un).
    pub fn carre(&mut self) {
        if self.en_erreur() {
            return;
        }
        self.reprendre_resultat();
        if !self.entree.is_empty() {
            self.entree.push('²');
        }
        self.focus_entree = true;
    }

    /// ( ) “intelligente” :
    /// - '(' si vide, après un opérateur ou après '('
    /// - ')' s’il reste des '(' ouvertes
    /// - sinon "×(" (multiplication explicite)
    pub fn parentheses(&mut self) {
        if self.en_erreur() {
            self.effacer_tout();
        }
        if self.resultat_affiche {
            self.entree.clear();
            self.resultat_affiche = false;
        }

        let ouvertes = self.entree.matches('(').count();
        let fermees = self.entree.matches(')').count();

        if self.entree.is_empty() || self.entree.ends_with(est_operateur) || self.entree.ends_with('(') {
            self.entree.push('(');
        } else if ouvertes > fermees {
            self.entree.push(')');
        } else {
            self.entree.push_str("×(");
        }
        self.focus_entree = true;
    }

    /* ------------------------ Résultats / erreurs ------------------------ */

    /// Utilitaire : placer une erreur (effacée automatiquement après le délai).
    pub fn set_erreur(&mut self, msg: impl Into<String>, maintenant: f64) {
        self.erreur = Some(ErreurAffichee {
            message: msg.into(),
            depuis: maintenant,
        });
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat validé.
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur = None;
        self.dernier_resultat = resultat.into();
        self.resultat_affiche = true;
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// À appeler à chaque frame : efface l’erreur une fois le délai écoulé.
    /// Retourne le temps restant avant effacement (pour planifier un repaint).
    pub fn tick(&mut self, maintenant: f64) -> Option<f64> {
        let depuis = self.erreur.as_ref()?.depuis;
        let ecoule = maintenant - depuis;
        if ecoule >= DELAI_EFFACEMENT_ERREUR_S {
            self.effacer_tout();
            None
        } else {
            Some(DELAI_EFFACEMENT_ERREUR_S - ecoule)
        }
    }
}
