use crate::QuizApp;
use crate::model::option_letter;
use crate::ui::helpers::{INDIGO, option_button, primary_button};
use egui::{Align, CentralPanel, Context, Layout, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 520.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 2.0);

        let Some(scenario) = app.game.current_scenario().cloned() else {
            return;
        };
        let number = app.game.current_question_index + 1;
        let total = app.game.total_questions;

        // Acciones a aplicar tras pintar
        let mut clicked_option = None;
        let mut pressed_primary = false;

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(scenario.category.to_uppercase())
                                .small()
                                .strong()
                                .color(INDIGO),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(format!("Aufgabe {number} / {total}"));
                        });
                    });
                    ui.add_space(12.0);

                    // Descripción con scroll fijo
                    ScrollArea::vertical()
                        .id_salt("scenario_description")
                        .max_height(160.0)
                        .show(ui, |ui| {
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                ui.label(RichText::new(&scenario.description).size(18.0).strong());
                            });
                        });
                    ui.add_space(16.0);

                    let submitted = app.card.is_submitted;
                    for option in &scenario.options {
                        let feedback = app.card.feedback_for(option, &scenario);
                        if option_button(
                            ui,
                            option_letter(option.id),
                            &option.text,
                            feedback,
                            panel_width,
                            !submitted,
                        ) {
                            clicked_option = Some(option.id);
                        }
                        ui.add_space(8.0);
                    }

                    if submitted {
                        ui.add_space(4.0);
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.set_width(panel_width - 16.0);
                            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                                ui.label(RichText::new("ℹ Hintergrundwissen").strong());
                                ui.label(&scenario.explanation);
                            });
                        });
                        ui.add_space(8.0);
                    }

                    pressed_primary = primary_button(
                        ui,
                        app.card.primary_label(),
                        panel_width,
                        app.card.primary_enabled(),
                    );
                });
        });

        if let Some(id) = clicked_option {
            app.select_option(id);
        }
        if pressed_primary {
            app.press_primary();
        }

        ui.add_space(extra_space / 2.0);
    });
}
