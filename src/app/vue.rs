// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter valide (quand le champ est focus) ; la frappe directe passe par l’aperçu
// - Tactile : pavé à gros boutons, focus redonné après clic (focus_entree)
// - Afficheur : aperçu live, résultat validé, ou "Erreur" (effacée après 2 s)

use eframe::egui;

use super::commandes::Touche;
use super::etat::AppCalc;

/// Seuls glyphes hors ASCII autorisés sur les touches (polices par défaut d’egui).
const GLYPHES_PAVE: [char; 4] = ['√', '²', '×', '÷'];

/// Pavé : 5 lignes × 4 colonnes (libellé, touche).
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("C", Touche::ToutEffacer),
        ("( )", Touche::Parentheses),
        ("%", Touche::Pourcentage),
        ("÷", Touche::Operateur('÷')),
    ],
    [
        ("7", Touche::Chiffre('7')),
        ("8", Touche::Chiffre('8')),
        ("9", Touche::Chiffre('9')),
        ("×", Touche::Operateur('×')),
    ],
    [
        ("4", Touche::Chiffre('4')),
        ("5", Touche::Chiffre('5')),
        ("6", Touche::Chiffre('6')),
        ("-", Touche::Operateur('-')),
    ],
    [
        ("1", Touche::Chiffre('1')),
        ("2", Touche::Chiffre('2')),
        ("3", Touche::Chiffre('3')),
        ("+", Touche::Operateur('+')),
    ],
    [
        ("√", Touche::Racine),
        ("0", Touche::Chiffre('0')),
        (".", Touche::Point),
        ("=", Touche::Egal),
    ],
];

/// Dernière ligne (case vide entre ^ et DEL).
const PAVE_BAS: [(&str, Touche); 3] = [
    ("x²", Touche::Carre),
    ("^", Touche::Operateur('^')),
    ("DEL", Touche::Effacer),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        let maintenant = ui.input(|i| i.time);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui, maintenant);

                ui.add_space(8.0);
                self.ui_afficheur(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.label("Entrée :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2(3+4), √(16)+3², 1÷3")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Frappe directe : l’entrée redevient une saisie en cours
        if resp.changed() {
            self.resultat_affiche = false;
            self.rafraichir_apercu();
        }

        // --- Clavier : Enter valide (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.valider(maintenant);
            self.focus_entree = true;
        }
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        let visuals = ui.visuals();
        let couleur = if self.en_erreur() {
            visuals.error_fg_color
        } else if self.resultat_affiche {
            visuals.strong_text_color()
        } else {
            visuals.weak_text_color()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.affichage())
                            .monospace()
                            .size(28.0)
                            .color(couleur),
                    );
                });
            });

        if let Some(e) = &self.erreur {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, &e.message);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE.iter() {
                    for (label, touche) in ligne.iter() {
                        self.bouton(ui, label, *touche, maintenant);
                    }
                    ui.end_row();
                }

                let [carre, puissance, del] = PAVE_BAS;
                self.bouton(ui, carre.0, carre.1, maintenant);
                self.bouton(ui, puissance.0, puissance.1, maintenant);
                ui.label("");
                self.bouton(ui, del.0, del.1, maintenant);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Normalisé", "demarche_normalise", &self.demarche.normalise);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, maintenant: f64) {
        let resp = ui.add_sized([64.0, 40.0], egui::Button::new(label));
        if resp.clicked() {
            self.touche(touche, maintenant);
            self.focus_entree = true;
        }
    }
}
