//! Cliente del generador de escenarios (Gemini `generateContent`).

use crate::config::Config;
use crate::error::GenerationError;
use crate::model::{AnswerOption, Scenario, TOTAL_GOAL};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::Deserialize;
use serde_json::{Value, json};

/// Fuente de lotes de escenarios
pub trait ScenarioProvider {
    /// Pide `count` escenarios; `offset` es la posición del primero dentro de la serie.
    fn fetch(&self, count: usize, offset: usize) -> Result<Vec<Scenario>, GenerationError>;
}

#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
    seed: i64,
    temperature: f32,
}

impl GeminiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.clone(),
            seed: config.seed,
            temperature: config.temperature,
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    pub fn request_body(&self, count: usize, offset: usize) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [ { "text": build_prompt(count, offset) } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "seed": self.seed,
                "temperature": self.temperature,
            }
        })
    }
}

impl ScenarioProvider for GeminiProvider {
    fn fetch(&self, count: usize, offset: usize) -> Result<Vec<Scenario>, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::MissingApiKey)?;

        log::debug!("requesting {count} scenarios at offset {offset} from {}", self.model);
        let resp = self
            .client
            .post(self.url())
            .header(USER_AGENT, concat!("netiquette_master/", env!("CARGO_PKG_VERSION")))
            .header("x-goog-api-key", api_key)
            .json(&self.request_body(count, offset))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = resp.json()?;
        let text = parsed.text().ok_or(GenerationError::EmptyResponse)?;
        parse_batch(&text, offset)
    }
}

/// Instrucciones de generación (en alemán, como la app)
pub fn build_prompt(count: usize, offset: usize) -> String {
    format!(
        "Erstelle {count} verschiedene, sehr realistische Netiquette-Fallbeispiele für Jugendliche (13-19 Jahre).\n\
         Dies ist Teil einer Serie von {TOTAL_GOAL} Aufgaben (Startpunkt-Index: {offset}).\n\
         FOKUS: WhatsApp, Discord, TikTok, Instagram, BeReal, Gaming.\n\
         THEMEN: Ghosting, Memes, Privatsphäre, Cybermobbing-Prävention, Feedback-Kultur.\n\
         WICHTIG: Die 3 Antwortmöglichkeiten müssen knifflig sein. Keine offensichtlich falschen Antworten.\n\
         Sprache: Deutsch (Jugend-Slang okay)."
    )
}

fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": {
                    "type": "STRING",
                    "description": "Kategorie des Szenarios (z.B. TikTok, Discord, WhatsApp, Gaming, Insta)."
                },
                "description": {
                    "type": "STRING",
                    "description": "Ein realistisches Fallbeispiel aus dem Alltag eines 13- bis 19-Jährigen auf Deutsch."
                },
                "options": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "id": { "type": "INTEGER" },
                            "text": { "type": "STRING" }
                        },
                        "required": ["id", "text"]
                    }
                },
                "correctOptionId": {
                    "type": "INTEGER",
                    "description": "Die ID der korrekten Verhaltensweise (1, 2 oder 3)."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "Detaillierte Erklärung, warum diese Wahl korrekt ist."
                }
            },
            "required": ["category", "description", "options", "correctOptionId", "explanation"]
        }
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

// Lo que devuelve el modelo: todo menos el id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedScenario {
    category: String,
    description: String,
    options: Vec<AnswerOption>,
    correct_option_id: u32,
    explanation: String,
}

impl GeneratedScenario {
    fn into_scenario(self, position: usize) -> Result<Scenario, String> {
        if self.options.len() != 3 {
            return Err(format!("expected 3 options, got {}", self.options.len()));
        }
        // Los ids son también la letra que se muestra: tienen que ser 1, 2 y 3
        let mut ids: Vec<u32> = self.options.iter().map(|o| o.id).collect();
        ids.sort_unstable();
        if ids != [1, 2, 3] {
            return Err(format!("option ids must be 1, 2 and 3, got {ids:?}"));
        }
        if !self.options.iter().any(|o| o.id == self.correct_option_id) {
            return Err(format!(
                "correctOptionId {} matches no option",
                self.correct_option_id
            ));
        }
        Ok(Scenario {
            id: scenario_id(position),
            category: self.category,
            description: self.description,
            options: self.options,
            correct_option_id: self.correct_option_id,
            explanation: self.explanation,
        })
    }
}

/// Id estable según la posición (1-based) dentro de la serie
pub fn scenario_id(position: usize) -> String {
    format!("scenario-{position:03}")
}

/// Convierte el texto JSON del modelo en escenarios con id asignado
pub fn parse_batch(text: &str, offset: usize) -> Result<Vec<Scenario>, GenerationError> {
    let items: Vec<GeneratedScenario> = serde_json::from_str(text.trim())?;
    if items.is_empty() {
        return Err(GenerationError::EmptyBatch);
    }
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let position = offset + i + 1;
            item.into_scenario(position)
                .map_err(|reason| GenerationError::InvalidScenario {
                    index: position,
                    reason,
                })
        })
        .collect()
}
