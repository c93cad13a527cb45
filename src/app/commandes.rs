//! src/app/commandes.rs
//!
//! Actions qui passent par le noyau : "=", aperçu live, %, √.
//! Le noyau ne garde rien entre deux appels ; on lui passe toujours l’entrée complète.

use tracing::{info, warn};

use crate::noyau::{self, DemarcheNoyau, ErrorKind};

use super::etat::{est_operateur, AppCalc, Demarche};

impl AppCalc {
    /// "=" : évaluation complète ; succès => résultat affiché, échec => erreur classée.
    pub fn valider(&mut self, maintenant: f64) {
        if self.entree.is_empty() {
            return;
        }

        let (d, res) = noyau::evaluate_traced(&self.entree);
        let demarche = Demarche::from(d);

        match res {
            Ok(resultat) => {
                info!(entree = %self.entree, %resultat, "expression validée");
                self.set_resultat(resultat, demarche);
            }
            Err(e) => {
                warn!(entree = %self.entree, erreur = %e, "validation refusée");
                self.set_erreur(e.to_string(), maintenant);
            }
        }
    }

    /// Aperçu après chaque modification de l’entrée.
    /// Ne remplace l’afficheur que si l’aperçu diffère de l’entrée brute (ex: "7" reste "7").
    pub fn rafraichir_apercu(&mut self) {
        if self.en_erreur() || self.resultat_affiche || self.entree.is_empty() {
            return;
        }
        if let Some(r) = noyau::preview(&self.entree) {
            if r != self.entree {
                self.dernier_resultat = r;
            }
        }
    }

    /// % : évalue, divise par 100, affiche comme résultat.
    pub fn pourcentage(&mut self, maintenant: f64) {
        if self.en_erreur() || self.entree.is_empty() {
            return;
        }

        match noyau::evaluate(&self.entree).and_then(|r| relire(&r)) {
            Ok(v) => {
                let txt = noyau::format_number(v / 100.0);
                self.entree = txt.clone();
                self.set_resultat(txt, Demarche::default());
            }
            Err(e) => self.set_erreur(e.to_string(), maintenant),
        }
    }

    /// √ :
    /// - entrée vide => "√("
    /// - résultat affiché => racine du résultat, tout de suite
    /// - sinon ajoute "√(" (précédé de × après un nombre ou ')')
    pub fn racine(&mut self, maintenant: f64) {
        if self.en_erreur() {
            return;
        }

        if self.entree.is_empty() {
            self.entree.push_str("√(");
        } else if self.resultat_affiche {
            match relire(&self.dernier_resultat) {
                Ok(v) if v < 0.0 => {
                    self.set_erreur(ErrorKind::NegativeSquareRoot.to_string(), maintenant);
                }
                Ok(v) => {
                    let txt = noyau::format_number(v.sqrt());
                    self.entree = txt.clone();
                    self.set_resultat(txt, Demarche::default());
                }
                Err(e) => self.set_erreur(e.to_string(), maintenant),
            }
        } else {
            let colle = self
                .entree
                .chars()
                .last()
                .is_some_and(|c| c.is_ascii_digit() || c == ')' || c == '²');
            if colle {
                self.entree.push('×');
            }
            self.entree.push_str("√(");
        }
        self.focus_entree = true;
    }

    /// Saisie d’une touche du pavé, suivie de l’aperçu.
    pub fn touche(&mut self, t: Touche, maintenant: f64) {
        match t {
            Touche::Chiffre(c) => self.saisir_chiffre(c),
            Touche::Point => self.saisir_point(),
            Touche::Operateur(op) if est_operateur(op) => self.saisir_operateur(op),
            Touche::Operateur(_) => {}
            Touche::Parentheses => self.parentheses(),
            Touche::Carre => self.carre(),
            Touche::Racine => self.racine(maintenant),
            Touche::Pourcentage => self.pourcentage(maintenant),
            Touche::Effacer => self.effacer_dernier(),
            Touche::ToutEffacer => self.effacer_tout(),
            Touche::Egal => self.valider(maintenant),
        }
        self.rafraichir_apercu();
    }
}

impl From<DemarcheNoyau> for Demarche {
    fn from(d: DemarcheNoyau) -> Self {
        Self {
            normalise: d.normalise,
            jetons: d.jetons,
            rpn: d.rpn,
        }
    }
}

/// Relit un texte produit par `format_number` (décimal ou scientifique).
fn relire(s: &str) -> Result<f64, ErrorKind> {
    s.parse::<f64>().map_err(|_| ErrorKind::InvalidExpression)
}

/// Touches du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Operateur(char),
    Parentheses,
    Carre,
    Racine,
    Pourcentage,
    Effacer,
    ToutEffacer,
    Egal,
}
