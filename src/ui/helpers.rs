// src/ui/helpers.rs
use crate::presenter::OptionFeedback;
use crate::results::Accent;
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub const INDIGO: Color32 = Color32::from_rgb(79, 70, 229);
const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
const BLUE: Color32 = Color32::from_rgb(37, 99, 235);
const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
const RED: Color32 = Color32::from_rgb(239, 68, 68);

pub fn accent_color(accent: Accent) -> Color32 {
    match accent {
        Accent::Indigo => INDIGO,
        Accent::Green => GREEN,
        Accent::Blue => BLUE,
        Accent::Orange => ORANGE,
    }
}

/// Botón de opción con el borde según el feedback. Devuelve si se pulsó.
pub fn option_button(
    ui: &mut Ui,
    letter: char,
    text: &str,
    feedback: OptionFeedback,
    width: f32,
    enabled: bool,
) -> bool {
    let (stroke, text_color) = match feedback {
        OptionFeedback::Idle => (Stroke::new(1.0, Color32::GRAY), None),
        OptionFeedback::Selected => (Stroke::new(2.5, INDIGO), None),
        OptionFeedback::Correct => (Stroke::new(2.5, GREEN), Some(GREEN)),
        OptionFeedback::Wrong => (Stroke::new(2.5, RED), Some(RED)),
        OptionFeedback::Dimmed => (Stroke::new(1.0, Color32::DARK_GRAY), Some(Color32::GRAY)),
    };

    let mut label = RichText::new(format!("{letter})   {text}"));
    if let Some(color) = text_color {
        label = label.color(color);
    }

    ui.add_enabled(
        enabled,
        Button::new(label)
            .wrap()
            .stroke(stroke)
            .min_size(Vec2::new(width, 44.0)),
    )
    .clicked()
}

/// Botón ancho de acción principal
pub fn primary_button(ui: &mut Ui, label: &str, width: f32, enabled: bool) -> bool {
    let button = Button::new(RichText::new(label).strong().color(Color32::WHITE))
        .fill(INDIGO)
        .min_size(Vec2::new(width, 44.0));
    ui.add_enabled(enabled, button).clicked()
}
