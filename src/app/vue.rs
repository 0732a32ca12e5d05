// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression affichée (× ÷ −) + sortie (résultat ou erreur)
// - Pavé : gros boutons, une touche = une entrée de pile
//
// Le clavier physique est géré dans app.rs (pas de champ texte ici :
// l’expression ne se modifie que par touches).

use eframe::egui;

use super::etat::{AppCalc, Touche, LIBELLE_ERREUR};
use crate::noyau::{Op, Unaire};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);
                ui.add_space(6.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "ecran_expression", &self.etat.affichage(), 1);

        let sortie = self.etat.sortie();
        ui.horizontal(|ui| {
            ui.label("=");
            if sortie == LIBELLE_ERREUR {
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    egui::RichText::new(sortie).italics().size(22.0),
                );
            } else {
                ui.label(egui::RichText::new(sortie).monospace().size(22.0));
            }
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "DEL", Touche::Effacer);
            self.bouton(ui, "C", Touche::Vider);
            for kind in [Unaire::Carre, Unaire::Inverse, Unaire::Racine] {
                self.bouton(ui, kind.libelle(), Touche::Unaire(kind));
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.chiffres(ui, ['7', '8', '9']);
                self.bouton_op(ui, Op::Div);
                ui.end_row();

                self.chiffres(ui, ['4', '5', '6']);
                self.bouton_op(ui, Op::Mul);
                ui.end_row();

                self.chiffres(ui, ['1', '2', '3']);
                self.bouton_op(ui, Op::Sub);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'));
                self.bouton(ui, ".", Touche::Point);
                self.bouton(ui, "=", Touche::Egal);
                self.bouton_op(ui, Op::Add);
                ui.end_row();
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let d = &self.etat.demarche;
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "Suite", "demarche_suite", &d.sequence);
                if let Some(e) = &self.etat.erreur {
                    Self::champ_demarche(ui, "Erreur", "demarche_erreur", &e.to_string());
                }
            });
    }

    fn chiffres(&mut self, ui: &mut egui::Ui, ligne: [char; 3]) {
        for c in ligne {
            self.bouton(ui, &c.to_string(), Touche::Chiffre(c));
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Op) {
        self.bouton(ui, op.glyphe(), Touche::Op(op));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized(TAILLE_TOUCHE, egui::Button::new(label));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }
}
