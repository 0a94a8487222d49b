use crate::QuizApp;
use crate::model::TOTAL_GOAL;
use crate::ui::helpers::INDIGO;
use crate::ui::layout::centered_panel;
use egui::{Context, ProgressBar, RichText, Spinner};

/// Mientras se mira la caché
pub fn ui_idle(_app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.add(Spinner::new().size(40.0));
            ui.add_space(12.0);
            ui.label("Aufgaben werden vorbereitet…");
        });
    });
}

pub fn ui_loading(app: &mut QuizApp, ctx: &Context) {
    let loaded = app.game.setup_progress;
    centered_panel(ctx, 320.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add(Spinner::new().size(56.0).color(INDIGO));
            ui.add_space(24.0);
            ui.label(
                RichText::new(format!("Erstes Setup ({TOTAL_GOAL} Aufgaben)"))
                    .heading()
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(
                "Die KI generiert jetzt DEINE feste Sammlung an Challenges. Das passiert nur einmal!",
            );
            ui.add_space(20.0);
            ui.add(
                ProgressBar::new(loaded as f32 / TOTAL_GOAL as f32)
                    .fill(INDIGO)
                    .desired_width(256.0),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{loaded} / {TOTAL_GOAL} geladen")).strong());
        });
    });
}
