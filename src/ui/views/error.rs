use crate::QuizApp;
use crate::ui::helpers::primary_button;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

pub fn ui_error(app: &mut QuizApp, ctx: &Context) {
    let mut retry = false;
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Initialisierungsfehler");
            ui.add_space(12.0);
            ui.label("Wir konnten die 100 Aufgaben nicht vorbereiten.");
            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(RichText::new(&app.message).small().color(Color32::GRAY));
            }
            ui.add_space(20.0);
            let width = ui.available_width();
            retry = primary_button(ui, "Nochmal versuchen", width, true);
        });
    });

    if retry {
        app.retry();
    }
}
