use crate::config::Config;
use crate::game::{GameEvent, GameState};
use crate::loader::LoadMessage;
use crate::presenter::QuestionCard;
use crossbeam_channel::Receiver;
use eframe::egui::Visuals;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod exports;
pub mod loading;

/// Lo único que se guarda en el storage de eframe
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

pub struct QuizApp {
    pub game: GameState,
    pub card: QuestionCard,
    pub config: Config,
    pub prefs: UiPrefs,
    pub message: String,
    pub confirm_reset: bool,
    loader: Option<Receiver<LoadMessage>>,
}

impl QuizApp {
    pub fn new(config: Config) -> Self {
        Self {
            game: GameState::default(),
            card: QuestionCard::default(),
            config,
            prefs: UiPrefs::default(),
            message: String::new(),
            confirm_reset: false,
            loader: None,
        }
    }

    /// Arranque desde eframe: recupera el tema y lanza la carga
    pub fn from_creation_context(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        cc.egui_ctx.set_visuals(if prefs.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let mut app = Self::new(config);
        app.prefs = prefs;
        app.start_loading();
        app
    }

    /// Única vía para cambiar el estado del juego
    pub fn dispatch(&mut self, event: GameEvent) {
        let state = std::mem::take(&mut self.game);
        self.game = state.apply(event);
    }
}
