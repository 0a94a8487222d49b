//! Máquina de estados del juego como reducer puro: `estado + evento -> estado`.

use crate::model::{Scenario, Status, TOTAL_GOAL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_question_index: usize,
    pub score: usize,
    pub scenarios: Vec<Scenario>,
    pub is_game_over: bool,
    pub status: Status,
    pub total_questions: usize,
    // Escenarios recibidos en el intento de carga actual
    pub setup_progress: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_question_index: 0,
            score: 0,
            scenarios: Vec::new(),
            is_game_over: false,
            status: Status::Idle,
            total_questions: TOTAL_GOAL,
            setup_progress: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// No hay caché válida: empieza a pedir lotes
    FetchStarted,
    /// Total acumulado de escenarios recibidos
    Progress(usize),
    /// Set completo disponible (de la caché o recién generado)
    Loaded(Vec<Scenario>),
    LoadFailed,
    Answered { correct: bool },
    Restart,
    /// El usuario borró el set guardado; se vuelve a arrancar
    DataReset,
}

impl GameState {
    pub fn apply(self, event: GameEvent) -> GameState {
        match event {
            GameEvent::FetchStarted => GameState {
                status: Status::Loading,
                setup_progress: 0,
                ..self
            },
            GameEvent::Progress(count) => GameState {
                setup_progress: count,
                ..self
            },
            GameEvent::Loaded(scenarios) => GameState {
                setup_progress: scenarios.len().min(self.total_questions),
                scenarios,
                status: Status::Playing,
                current_question_index: 0,
                score: 0,
                is_game_over: false,
                ..self
            },
            GameEvent::LoadFailed => GameState {
                status: Status::Error,
                ..self
            },
            GameEvent::Answered { correct } => self.answered(correct),
            GameEvent::Restart => GameState {
                current_question_index: 0,
                score: 0,
                is_game_over: false,
                ..self
            },
            GameEvent::DataReset => GameState {
                total_questions: self.total_questions,
                ..GameState::default()
            },
        }
    }

    fn answered(self, correct: bool) -> GameState {
        if self.status != Status::Playing || self.is_game_over {
            return self;
        }
        let score = if correct { self.score + 1 } else { self.score };
        let next = self.current_question_index + 1;
        if next >= self.total_questions {
            // El índice se queda en la última pregunta
            return GameState {
                score,
                is_game_over: true,
                ..self
            };
        }
        GameState {
            score,
            current_question_index: next,
            ..self
        }
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        if self.status != Status::Playing || self.is_game_over {
            return None;
        }
        self.scenarios.get(self.current_question_index)
    }

    /// Porcentaje de avance para la barra inferior
    pub fn progress_percent(&self) -> usize {
        if self.total_questions == 0 {
            return 0;
        }
        (self.current_question_index as f64 / self.total_questions as f64 * 100.0).round() as usize
    }

    pub fn is_complete_set(&self) -> bool {
        self.scenarios.len() >= self.total_questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::scenarios;

    fn playing() -> GameState {
        GameState::default().apply(GameEvent::Loaded(scenarios(100)))
    }

    #[test]
    fn loaded_set_starts_fresh_game() {
        let state = GameState::default()
            .apply(GameEvent::FetchStarted)
            .apply(GameEvent::Progress(40))
            .apply(GameEvent::Loaded(scenarios(100)));
        assert_eq!(state.status, Status::Playing);
        assert_eq!(state.current_question_index, 0);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over);
        assert_eq!(state.current_scenario().unwrap().id, "scenario-001");
    }

    #[test]
    fn fetch_started_resets_progress() {
        let state = GameState::default()
            .apply(GameEvent::FetchStarted)
            .apply(GameEvent::Progress(30))
            .apply(GameEvent::LoadFailed);
        assert_eq!(state.status, Status::Error);
        assert_eq!(state.setup_progress, 30);

        let retry = state.apply(GameEvent::FetchStarted);
        assert_eq!(retry.status, Status::Loading);
        assert_eq!(retry.setup_progress, 0);
    }

    #[test]
    fn score_moves_only_on_correct_answers() {
        let mut state = playing();
        let pattern = [true, false, true, true, false];
        let mut last_score = 0;
        for correct in pattern {
            state = state.apply(GameEvent::Answered { correct });
            assert!(state.score >= last_score);
            assert_eq!(state.score - last_score, usize::from(correct));
            last_score = state.score;
        }
        assert_eq!(state.score, 3);
        assert_eq!(state.current_question_index, 5);
    }

    #[test]
    fn game_ends_after_exactly_total_answers() {
        let mut state = playing();
        for i in 0..100 {
            assert!(!state.is_game_over, "ended early at {i}");
            state = state.apply(GameEvent::Answered { correct: i == 0 });
        }
        assert!(state.is_game_over);
        assert_eq!(state.current_question_index, 99);
        assert_eq!(state.score, 1);
        assert!(state.current_scenario().is_none());

        // Más respuestas no cambian nada
        let after = state.clone().apply(GameEvent::Answered { correct: true });
        assert_eq!(after, state);
    }

    #[test]
    fn restart_keeps_the_same_set() {
        let mut state = playing();
        for _ in 0..100 {
            state = state.apply(GameEvent::Answered { correct: true });
        }
        let set = state.scenarios.clone();
        let restarted = state.apply(GameEvent::Restart);
        assert_eq!(restarted.score, 0);
        assert_eq!(restarted.current_question_index, 0);
        assert!(!restarted.is_game_over);
        assert_eq!(restarted.scenarios, set);
        assert_eq!(restarted.status, Status::Playing);

        // Repetir el restart es idempotente
        assert_eq!(restarted.clone().apply(GameEvent::Restart), restarted);
    }

    #[test]
    fn surplus_cache_still_ends_at_total() {
        let mut state = GameState::default().apply(GameEvent::Loaded(scenarios(120)));
        for _ in 0..100 {
            state = state.apply(GameEvent::Answered { correct: false });
        }
        assert!(state.is_game_over);
        assert_eq!(state.scenarios.len(), 120);
    }

    #[test]
    fn answers_are_ignored_outside_play() {
        let state = GameState::default().apply(GameEvent::Answered { correct: true });
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn data_reset_drops_everything() {
        let state = playing()
            .apply(GameEvent::Answered { correct: true })
            .apply(GameEvent::DataReset);
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn progress_percent_rounds() {
        let mut state = playing();
        assert_eq!(state.progress_percent(), 0);
        for _ in 0..37 {
            state = state.apply(GameEvent::Answered { correct: false });
        }
        assert_eq!(state.progress_percent(), 37);
    }
}
