use super::*;
use crate::data::{FileStore, ScenarioStore};
use crate::generator::{GeminiProvider, ScenarioProvider};
use crate::loader::spawn_loader;
use crossbeam_channel::TryRecvError;

impl QuizApp {
    /// Transición de arranque con la caché en disco y Gemini
    pub fn start_loading(&mut self) {
        let store = FileStore::new(self.config.cache_file());
        let provider = GeminiProvider::new(&self.config);
        self.start_loading_with(store, provider);
    }

    pub fn start_loading_with<S, P>(&mut self, store: S, provider: P)
    where
        S: ScenarioStore + Send + 'static,
        P: ScenarioProvider + Send + 'static,
    {
        if self.loader.is_some() {
            log::debug!("load already running, ignoring");
            return;
        }
        self.card = QuestionCard::default();
        self.loader = Some(spawn_loader(store, provider));
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    /// Vacía el canal del hilo de carga. Devuelve `true` si llegó algo.
    pub fn poll_loader(&mut self) -> bool {
        let Some(rx) = &self.loader else {
            return false;
        };

        let mut messages = Vec::new();
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let changed = !messages.is_empty();
        for msg in messages {
            self.handle_load_message(msg);
        }

        // El hilo murió sin mandar resultado
        if disconnected && self.loader.is_some() {
            self.handle_load_message(LoadMessage::Failed("Ladevorgang abgebrochen".into()));
            return true;
        }
        changed
    }

    pub fn handle_load_message(&mut self, msg: LoadMessage) {
        let event = match msg {
            LoadMessage::FetchStarted => GameEvent::FetchStarted,
            LoadMessage::Progress(count) => GameEvent::Progress(count),
            LoadMessage::Finished(scenarios) => {
                self.loader = None;
                self.message.clear();
                GameEvent::Loaded(scenarios)
            }
            LoadMessage::Failed(error) => {
                self.loader = None;
                self.message = error;
                GameEvent::LoadFailed
            }
        };
        self.dispatch(event);
    }

    /// "Nochmal versuchen": todo desde cero, sin progreso parcial
    pub fn retry(&mut self) {
        self.message.clear();
        self.start_loading();
    }

    /// Espera (como mucho 5 s) a que el hilo de carga termine
    #[cfg(test)]
    pub(crate) fn wait_for_load(&mut self) {
        use std::time::{Duration, Instant};
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.is_loading() && Instant::now() < deadline {
            self.poll_loader();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!self.is_loading(), "loader did not finish in time");
    }
}
