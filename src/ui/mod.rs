mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::Status;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, confirm_reset_window, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Mensajes del hilo de carga
        self.poll_loader();
        if self.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Cabecera y pie solo mientras se juega
        if self.game.status == Status::Playing {
            top_panel(self, ctx);
            bottom_panel(self, ctx);
        }

        // Dispatch por estado
        match self.game.status {
            Status::Idle => views::loading::ui_idle(self, ctx),
            Status::Loading => views::loading::ui_loading(self, ctx),
            Status::Error => views::error::ui_error(self, ctx),
            Status::Playing if self.game.is_game_over => views::results::ui_results(self, ctx),
            Status::Playing => views::quiz::ui_quiz(self, ctx),
        }

        if self.confirm_reset {
            confirm_reset_window(self, ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
