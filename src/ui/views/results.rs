use crate::QuizApp;
use crate::ui::helpers::{INDIGO, accent_color, primary_button};
use crate::ui::layout::centered_panel;
use egui::{Button, Context, ProgressBar, RichText, Vec2};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let summary = app.summary();
    let rank = summary.rank;

    let mut restart = false;
    let mut certificate = false;
    let mut guide = false;

    centered_panel(ctx, 480.0, 460.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Finish!").heading().strong().italics());
            ui.label(RichText::new("DEINE STATS").small());
            ui.add_space(18.0);

            ui.label(
                RichText::new(format!("{} / {}", summary.score, summary.total))
                    .size(56.0)
                    .strong(),
            );
            ui.label(
                RichText::new(rank.label().to_uppercase())
                    .size(22.0)
                    .strong()
                    .italics()
                    .color(accent_color(rank.accent())),
            );
            ui.add_space(6.0);
            ui.label(rank.message());
            ui.add_space(18.0);

            ui.add(ProgressBar::new(summary.percentage as f32 / 100.0).fill(INDIGO));
            ui.add_space(18.0);

            let width = ui.available_width();
            restart = primary_button(ui, "Nochmal grinden", width, true);
            ui.add_space(8.0);

            // Exportaciones
            ui.columns(2, |cols| {
                let half = cols[0].available_width();
                certificate = cols[0]
                    .add(Button::new("⬇ Zertifikat").min_size(Vec2::new(half, 40.0)))
                    .clicked();
                guide = cols[1]
                    .add(Button::new("⬇ Lern-Guide").min_size(Vec2::new(half, 40.0)))
                    .clicked();
            });

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).small());
            }
        });
    });

    if restart {
        app.restart();
    }
    if certificate {
        app.download_certificate();
    }
    if guide {
        app.download_guide();
    }
}
