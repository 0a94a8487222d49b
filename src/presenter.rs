// src/presenter.rs

use crate::model::{AnswerOption, Scenario};

/// Cómo pintar cada opción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

/// Estado de interacción de una sola pregunta
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCard {
    pub selected_option_id: Option<u32>,
    pub is_submitted: bool,
}

impl QuestionCard {
    /// Solo cambia la selección mientras no se haya confirmado
    pub fn select(&mut self, option_id: u32) {
        if self.is_submitted {
            return;
        }
        self.selected_option_id = Some(option_id);
    }

    /// Congela la elección y muestra el feedback. Sin selección no hace nada.
    pub fn submit(&mut self) -> bool {
        if self.selected_option_id.is_none() {
            return false;
        }
        self.is_submitted = true;
        true
    }

    /// Devuelve si la respuesta congelada era correcta y limpia el estado
    pub fn advance(&mut self, scenario: &Scenario) -> Option<bool> {
        if !self.is_submitted {
            return None;
        }
        let correct = self
            .selected_option_id
            .is_some_and(|id| scenario.is_correct(id));
        *self = QuestionCard::default();
        Some(correct)
    }

    /// Botón principal: primero confirma, después avanza.
    /// `Some(correct)` solo cuando hay que avisar al juego.
    pub fn press_primary(&mut self, scenario: &Scenario) -> Option<bool> {
        if self.is_submitted {
            self.advance(scenario)
        } else {
            self.submit();
            None
        }
    }

    pub fn primary_enabled(&self) -> bool {
        self.selected_option_id.is_some()
    }

    pub fn primary_label(&self) -> &'static str {
        if self.is_submitted {
            "Nächste Aufgabe"
        } else {
            "Bestätigen"
        }
    }

    pub fn feedback_for(&self, option: &AnswerOption, scenario: &Scenario) -> OptionFeedback {
        let selected = self.selected_option_id == Some(option.id);
        if !self.is_submitted {
            return if selected {
                OptionFeedback::Selected
            } else {
                OptionFeedback::Idle
            };
        }
        if scenario.is_correct(option.id) {
            OptionFeedback::Correct
        } else if selected {
            OptionFeedback::Wrong
        } else {
            OptionFeedback::Dimmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testing::scenario;

    #[test]
    fn primary_disabled_without_selection() {
        let mut card = QuestionCard::default();
        assert!(!card.primary_enabled());
        assert_eq!(card.primary_label(), "Bestätigen");
        assert!(!card.submit());
        assert!(!card.is_submitted);
    }

    #[test]
    fn selection_is_frozen_after_submit() {
        let mut card = QuestionCard::default();
        card.select(1);
        card.select(3);
        assert_eq!(card.selected_option_id, Some(3));
        assert!(card.submit());
        card.select(1);
        assert_eq!(card.selected_option_id, Some(3));
        assert_eq!(card.primary_label(), "Nächste Aufgabe");
    }

    #[test]
    fn two_presses_emit_correctness_once() {
        let s = scenario(1); // correcta: 2
        let mut card = QuestionCard::default();
        card.select(2);
        assert_eq!(card.press_primary(&s), None);
        assert!(card.is_submitted);
        assert_eq!(card.press_primary(&s), Some(true));
        assert_eq!(card, QuestionCard::default());

        card.select(1);
        card.press_primary(&s);
        assert_eq!(card.press_primary(&s), Some(false));
    }

    #[test]
    fn advance_needs_submission() {
        let s = scenario(1);
        let mut card = QuestionCard::default();
        card.select(2);
        assert_eq!(card.advance(&s), None);
        assert_eq!(card.selected_option_id, Some(2));
    }

    #[test]
    fn feedback_per_option() {
        let s = scenario(1);
        let mut card = QuestionCard::default();
        card.select(3);
        let before: Vec<_> = s.options.iter().map(|o| card.feedback_for(o, &s)).collect();
        assert_eq!(
            before,
            vec![OptionFeedback::Idle, OptionFeedback::Idle, OptionFeedback::Selected]
        );

        card.submit();
        let after: Vec<_> = s.options.iter().map(|o| card.feedback_for(o, &s)).collect();
        assert_eq!(
            after,
            vec![OptionFeedback::Dimmed, OptionFeedback::Correct, OptionFeedback::Wrong]
        );
    }
}
