// src/app.rs
//
// Calculatrice à pavé : module App (racine)
// ----------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Clavier physique : chiffres, opérateurs, Enter, Backspace, ESC, Ctrl+V
//
// Important:
// - Si un champ texte a le focus (convertisseur, pourboire), le clavier lui appartient.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use calculatrice_clavier::noyau::Touche;
use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !ctx.wants_keyboard_input() {
            self.clavier(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

impl AppCalc {
    fn clavier(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());

        for ev in events {
            match ev {
                egui::Event::Text(texte) => {
                    // "*" et "/" valent × et ÷ ; "c" reste une lettre (ESC efface)
                    for c in texte.chars() {
                        match c.to_string().parse::<Touche>() {
                            Ok(t) if t != Touche::EFFACER => self.appuyer(t),
                            _ => {}
                        }
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.appuyer(Touche::EGAL),
                    egui::Key::Backspace => self.appuyer(Touche::RETOUR),
                    egui::Key::Escape => self.effacer(),
                    _ => {}
                },
                egui::Event::Paste(texte) => self.coller_texte(&texte),
                _ => {}
            }
        }
    }
}
