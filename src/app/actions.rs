use super::*;
use crate::data::{self, FileStore, ScenarioStore};
use crate::generator::{GeminiProvider, ScenarioProvider};

impl QuizApp {
    pub fn select_option(&mut self, option_id: u32) {
        self.card.select(option_id);
    }

    /// Botón principal de la tarjeta ("Bestätigen" / "Nächste Aufgabe")
    pub fn press_primary(&mut self) {
        let Some(scenario) = self.game.current_scenario() else {
            return;
        };
        if let Some(correct) = self.card.press_primary(scenario) {
            self.procesar_respuesta(correct);
        }
    }

    pub fn procesar_respuesta(&mut self, correct: bool) {
        self.dispatch(GameEvent::Answered { correct });
        if self.game.is_game_over {
            log::info!(
                "game over: {} / {}",
                self.game.score,
                self.game.total_questions
            );
        }
    }

    /// "Nochmal grinden": mismo set, sin volver a generar
    pub fn restart(&mut self) {
        self.card = QuestionCard::default();
        self.message.clear();
        self.dispatch(GameEvent::Restart);
    }

    /// Pide confirmación antes de borrar el set
    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    pub fn cancel_reset(&mut self) {
        self.confirm_reset = false;
    }

    /// Borra el set guardado y vuelve a arrancar (generación completa)
    pub fn reset_data(&mut self) {
        let store = FileStore::new(self.config.cache_file());
        let provider = GeminiProvider::new(&self.config);
        self.reset_data_with(store, provider);
    }

    pub fn reset_data_with<S, P>(&mut self, store: S, provider: P)
    where
        S: ScenarioStore + Send + 'static,
        P: ScenarioProvider + Send + 'static,
    {
        self.confirm_reset = false;
        if self.is_loading() {
            return;
        }
        // Si no se puede borrar, el arranque volvería a leer el set viejo
        if let Err(e) = data::delete_scenarios(&store) {
            log::error!("could not delete cached set: {e}");
            self.message = format!("Löschen fehlgeschlagen: {e}");
            return;
        }
        log::info!("cached set deleted");
        self.card = QuestionCard::default();
        self.message.clear();
        self.dispatch(GameEvent::DataReset);
        self.start_loading_with(store, provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::{MemoryStore, scenarios};
    use crate::model::Status;
    use crate::results::Rank;

    fn playing_app() -> QuizApp {
        let mut app = QuizApp::new(Config::default());
        app.dispatch(GameEvent::Loaded(scenarios(100)));
        app
    }

    fn answer(app: &mut QuizApp, option_id: u32) {
        app.select_option(option_id);
        app.press_primary();
        assert!(app.card.is_submitted);
        app.press_primary();
        assert!(!app.card.is_submitted);
    }

    #[test]
    fn first_right_then_all_wrong() {
        let mut app = playing_app();
        // la correcta de los escenarios de prueba es siempre la 2
        answer(&mut app, 2);
        for _ in 0..99 {
            answer(&mut app, 1);
        }
        assert!(app.game.is_game_over);
        assert_eq!(app.game.score, 1);
        let summary = app.summary();
        assert_eq!(summary.percentage, 1);
        assert_eq!(summary.rank, Rank::Noob);
    }

    #[test]
    fn confirm_without_selection_does_nothing() {
        let mut app = playing_app();
        app.press_primary();
        assert!(!app.card.is_submitted);
        assert_eq!(app.game.current_question_index, 0);
    }

    #[test]
    fn restart_after_game_over() {
        let mut app = playing_app();
        for _ in 0..100 {
            answer(&mut app, 2);
        }
        assert!(app.game.is_game_over);
        assert_eq!(app.game.score, 100);

        app.restart();
        assert!(!app.game.is_game_over);
        assert_eq!(app.game.score, 0);
        assert_eq!(app.game.current_question_index, 0);
        assert_eq!(app.game.scenarios, scenarios(100));
    }

    #[test]
    fn reset_deletes_cache_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("set.json"));
        data::save_scenarios(&store, &scenarios(100)).unwrap();

        let mut app = playing_app();
        app.request_reset();
        assert!(app.confirm_reset);

        // sin clave: el arranque no encuentra caché y la generación falla
        app.reset_data_with(store.clone(), GeminiProvider::new(&Config::default()));
        assert!(!app.confirm_reset);
        assert!(!store.path().exists());
        assert!(app.game.scenarios.is_empty());

        app.wait_for_load();
        assert_eq!(app.game.status, Status::Error);
    }

    #[test]
    fn failed_delete_keeps_the_current_game() {
        let mut store = MemoryStore::with_scenarios(&scenarios(100));
        store.locked = true;

        let mut app = playing_app();
        answer(&mut app, 2);
        app.request_reset();
        app.reset_data_with(store, GeminiProvider::new(&Config::default()));

        assert!(!app.confirm_reset);
        assert!(!app.is_loading());
        assert!(app.message.starts_with("Löschen fehlgeschlagen: "));
        assert_eq!(app.game.status, Status::Playing);
        assert_eq!(app.game.score, 1);
        assert_eq!(app.game.scenarios.len(), 100);
    }
}
