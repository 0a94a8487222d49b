use serde::{Deserialize, Serialize};

/// Número de escenarios que forman un set completo
pub const TOTAL_GOAL: usize = 100;
/// Tamaño de cada lote pedido al generador
pub const BATCH_SIZE: usize = 10;
/// Clave fija con la que se guarda el set generado
pub const STORAGE_KEY: &str = "netiquette_master_scenarios_v1";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub id: u32,
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub category: String,   // Plataforma / tema (TikTok, Discord...)
    pub description: String,
    pub options: Vec<AnswerOption>,
    pub correct_option_id: u32,
    pub explanation: String,
}

impl Scenario {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.id == self.correct_option_id)
    }

    pub fn is_correct(&self, option_id: u32) -> bool {
        option_id == self.correct_option_id
    }
}

/// Letra que se muestra para una opción (1 → A, 2 → B, 3 → C)
pub fn option_letter(id: u32) -> char {
    id.checked_add(64).and_then(char::from_u32).unwrap_or('?')
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Playing,
    Error,
}
