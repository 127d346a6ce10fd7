// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, un bouton = une Touche du noyau
// - Rangée scientifique repliable
// - Panneaux annexes : convertisseur, pourboire
//
// Note :
// - Libellés ASCII pour DEL / sqrt (polices par défaut d’egui)

use calculatrice_clavier::config::DECIMALES_MAX;
use calculatrice_clavier::convertisseurs::{
    calculer_pourboire, convertir_temperature_texte, convertir_texte, Temperature, UniteLineaire,
    POURCENTAGES_POURBOIRE,
};
use calculatrice_clavier::noyau::{Action, FonctionSci, Operateur, Phase, Touche};
use calculatrice_clavier::presse_papiers::{PressePapiers, PressePapiersMemoire};

use eframe::egui;

use super::etat::{AppCalc, Grandeur, Onglet};

/// Taille d’une touche du pavé.
const TOUCHE: [f32; 2] = [64.0, 44.0];

/// Presse-papiers egui : écriture système + copie locale (relue par "Coller").
struct PressePapiersEgui<'a> {
    ctx: &'a egui::Context,
    local: &'a mut PressePapiersMemoire,
}

impl PressePapiers for PressePapiersEgui<'_> {
    fn lire_texte(&mut self) -> String {
        self.local.lire_texte()
    }

    fn ecrire_texte(&mut self, texte: &str) {
        self.ctx.copy_text(texte.to_string());
        self.local.ecrire_texte(texte);
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.onglet, Onglet::Calculatrice, "Calculatrice");
                    ui.selectable_value(&mut self.onglet, Onglet::Convertisseur, "Convertisseur");
                    ui.selectable_value(&mut self.onglet, Onglet::Pourboire, "Pourboire");
                });
                ui.separator();

                match self.onglet {
                    Onglet::Calculatrice => self.ui_calculatrice(ui),
                    Onglet::Convertisseur => self.ui_convertisseur(ui),
                    Onglet::Pourboire => self.ui_pourboire(ui),
                }
            });
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        self.ui_ecran(ui);

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let mut sci = self.scientifique;
            if ui.checkbox(&mut sci, "Scientifique").changed() {
                self.basculer_scientifique();
            }

            ui.separator();

            ui.label("Décimales :");
            let mut d = self.config.decimales;
            let resp = ui.add(egui::DragValue::new(&mut d).speed(1).range(0..=DECIMALES_MAX));
            if resp.changed() {
                self.set_decimales(d);
            }
        });

        ui.add_space(6.0);
        if self.scientifique {
            self.ui_rangee_scientifique(ui);
            ui.add_space(6.0);
        }
        self.ui_pave(ui);

        ui.add_space(8.0);
        self.ui_actions(ui);

        ui.add_space(8.0);
        ui.separator();
        self.ui_demarche(ui);
        self.ui_historique(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Ligne d’expression (petite), puis valeur (grande)
                    let ligne = match self.saisie.phase() {
                        Phase::Evalue => self.saisie.calcul_source.clone().unwrap_or_default(),
                        _ => self.saisie.expression.clone(),
                    };
                    ui.monospace(ligne);

                    let couleur = match self.saisie.phase() {
                        Phase::Erreur => ui.visuals().error_fg_color,
                        _ => ui.visuals().strong_text_color(),
                    };
                    ui.label(
                        egui::RichText::new(&self.saisie.affichage)
                            .monospace()
                            .size(32.0)
                            .color(couleur),
                    );
                });
            });

        if let Some(note) = &self.notification {
            ui.small(note);
        }
    }

    fn ui_rangee_scientifique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for f in FonctionSci::TOUTES {
                let libelle = match f {
                    FonctionSci::Racine => "sqrt",
                    _ => f.libelle(),
                };
                self.bouton(ui, libelle, Touche::Fonction(f), [52.0, 34.0]);
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", Touche::EFFACER, TOUCHE);
                self.bouton(ui, "DEL", Touche::RETOUR, TOUCHE);
                self.bouton_op(ui, Operateur::Pourcent);
                self.bouton_op(ui, Operateur::Divise);
                ui.end_row();

                self.chiffres(ui, [7, 8, 9]);
                self.bouton_op(ui, Operateur::Fois);
                ui.end_row();

                self.chiffres(ui, [4, 5, 6]);
                self.bouton_op(ui, Operateur::Moins);
                ui.end_row();

                self.chiffres(ui, [1, 2, 3]);
                self.bouton_op(ui, Operateur::Plus);
                ui.end_row();

                self.chiffres(ui, [0]);
                self.bouton(ui, ".", Touche::Virgule, TOUCHE);
                ui.label("");
                self.bouton(ui, "=", Touche::Action(Action::Egal), TOUCHE);
                ui.end_row();
            });
    }

    fn chiffres<const N: usize>(&mut self, ui: &mut egui::Ui, chiffres: [u8; N]) {
        for d in chiffres {
            self.bouton(ui, &d.to_string(), Touche::Chiffre(d), TOUCHE);
        }
    }

    fn bouton_op(&mut self, ui: &mut egui::Ui, op: Operateur) {
        self.bouton(ui, &op.symbole().to_string(), Touche::Operateur(op), TOUCHE);
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, touche: Touche, taille: [f32; 2]) {
        let texte = egui::RichText::new(libelle).size(18.0);
        if ui.add_sized(taille, egui::Button::new(texte)).clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let ctx = ui.ctx().clone();

            if ui.button("Copier").clicked() {
                let mut local = std::mem::take(&mut self.presse_papiers);
                self.copier_vers(&mut PressePapiersEgui {
                    ctx: &ctx,
                    local: &mut local,
                });
                self.presse_papiers = local;
            }

            if ui
                .button("Coller")
                .on_hover_text("Ctrl+V colle depuis le système")
                .clicked()
            {
                let mut local = std::mem::take(&mut self.presse_papiers);
                self.coller_depuis(&mut PressePapiersEgui {
                    ctx: &ctx,
                    local: &mut local,
                });
                self.presse_papiers = local;
            }

            let evalue = self.saisie.phase() == Phase::Evalue;
            if ui
                .add_enabled(evalue, egui::Button::new("Enregistrer"))
                .clicked()
            {
                self.enregistrer_historique();
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let titre = format!("Historique ({})", self.historique.len());
        egui::CollapsingHeader::new(titre)
            .id_salt("historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("vide");
                    return;
                }

                for e in self.historique.recentes(20) {
                    ui.horizontal(|ui| {
                        ui.monospace(format!("{} = {}", e.expression, e.resultat));
                        ui.weak(e.cree_le.format("%H:%M:%S").to_string());
                    });
                }

                if ui.small_button("Vider").clicked() {
                    self.vider_historique();
                }
            });
    }

    /* ------------------------ Convertisseur ------------------------ */

    fn ui_convertisseur(&mut self, ui: &mut egui::Ui) {
        let c = &mut self.conversion;

        ui.horizontal(|ui| {
            ui.selectable_value(&mut c.grandeur, Grandeur::Longueur, "Longueur");
            ui.selectable_value(&mut c.grandeur, Grandeur::Masse, "Masse");
            ui.selectable_value(&mut c.grandeur, Grandeur::Temperature, "Température");
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Valeur :");
            ui.text_edit_singleline(&mut c.valeur);
        });

        let resultat = match c.grandeur {
            Grandeur::Longueur => {
                let (de, vers) = &mut c.longueur;
                choix_unites(ui, "longueur", de, vers);
                convertir_texte(&c.valeur, *de, *vers)
            }
            Grandeur::Masse => {
                let (de, vers) = &mut c.masse;
                choix_unites(ui, "masse", de, vers);
                convertir_texte(&c.valeur, *de, *vers)
            }
            Grandeur::Temperature => {
                let (de, vers) = &mut c.temperature;
                ui.horizontal(|ui| {
                    combo(ui, "temp_de", de, &Temperature::TOUTES, Temperature::nom);
                    ui.label("->");
                    combo(ui, "temp_vers", vers, &Temperature::TOUTES, Temperature::nom);
                });
                convertir_temperature_texte(&c.valeur, *de, *vers)
            }
        };

        ui.add_space(6.0);
        ui.label(egui::RichText::new(resultat.unwrap_or_default()).monospace().size(24.0));
    }

    /* ------------------------ Pourboire ------------------------ */

    fn ui_pourboire(&mut self, ui: &mut egui::Ui) {
        let p = &mut self.pourboire;

        ui.horizontal(|ui| {
            ui.label("Facture :");
            ui.text_edit_singleline(&mut p.facture);
        });

        ui.horizontal(|ui| {
            for pct in POURCENTAGES_POURBOIRE {
                ui.selectable_value(&mut p.pourcentage, pct, format!("{pct} %"));
            }
        });

        ui.horizontal(|ui| {
            ui.label("Personnes :");
            ui.add(egui::DragValue::new(&mut p.personnes).speed(1).range(1..=50));
        });

        let r = calculer_pourboire(&p.facture, p.pourcentage, p.personnes);

        ui.add_space(6.0);
        ui.monospace(format!("Pourboire : {:.2}", r.pourboire));
        ui.monospace(format!("Par personne : {:.2}", r.total_par_personne));
    }
}

fn choix_unites<U: UniteLineaire>(ui: &mut egui::Ui, id: &str, de: &mut U, vers: &mut U) {
    ui.horizontal(|ui| {
        combo(ui, &format!("{id}_de"), de, U::TOUTES, U::nom);
        ui.label("->");
        combo(ui, &format!("{id}_vers"), vers, U::TOUTES, U::nom);
    });
}

fn combo<U: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    courant: &mut U,
    toutes: &[U],
    nom: fn(U) -> &'static str,
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(nom(*courant))
        .show_ui(ui, |ui| {
            for &u in toutes {
                ui.selectable_value(courant, u, nom(u));
            }
        });
}
