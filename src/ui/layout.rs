use crate::QuizApp;
use crate::ui::helpers::INDIGO;
use egui::{Align, Align2, CentralPanel, Context, Frame, Layout, ProgressBar, RichText, Ui, Visuals};

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("Netiquette 100").heading().strong());
                ui.label(RichText::new("Deine persönliche Challenges-Sammlung").small());
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // Índice congelado en la última pregunta al terminar
                ui.label(
                    RichText::new(format!("Aufgabe {}", app.game.current_question_index + 1))
                        .strong(),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!("Points {}", app.game.score))
                        .strong()
                        .color(INDIGO),
                );
                ui.separator();
                if ui.button("⬇ HTML Download").clicked() {
                    app.download_offline_bundle();
                }
            });
        });

        if !app.message.is_empty() && !app.game.is_game_over {
            ui.label(RichText::new(&app.message).small());
        }
        ui.add_space(4.0);
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        if !app.game.is_game_over {
            let percent = app.game.progress_percent();
            ui.horizontal(|ui| {
                ui.label(RichText::new("FORTSCHRITT").small().strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(format!("{percent}%")).small().strong());
                });
            });
            ui.add(ProgressBar::new(percent as f32 / 100.0).fill(INDIGO));
            ui.add_space(4.0);
        }

        ui.horizontal(|ui| {
            if ui
                .button(RichText::new("🗑 Aufgaben-Set zurücksetzen & neu generieren").small())
                .clicked()
            {
                app.request_reset();
            }

            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("🌙 Dunkel").clicked() {
                    app.prefs.dark_mode = true;
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Hell").clicked() {
                    app.prefs.dark_mode = false;
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
        ui.add_space(4.0);
    });
}

pub fn confirm_reset_window(app: &mut QuizApp, ctx: &Context) {
    egui::Window::new("Aufgaben-Set zurücksetzen")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Möchtest du alle 100 Aufgaben löschen und neue generieren lassen?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Ja, löschen").clicked() {
                    app.reset_data();
                }
                if ui.button("Abbrechen").clicked() {
                    app.cancel_reset();
                }
            });
        });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    // Ajusta anchura
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
