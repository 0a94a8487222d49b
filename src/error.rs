use thiserror::Error;

/// Fallos al leer o escribir el set guardado en disco
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cached scenarios are not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("could not serialize scenarios for the cache: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("cache holds only {len} of {required} scenarios")]
    TooShort { len: usize, required: usize },
}

/// Fallos del generador externo de escenarios
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("request to the generation API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("generation API answered {status}: {body}")]
    Api { status: u16, body: String },
    #[error("generation API returned no text")]
    EmptyResponse,
    #[error("generated content is not the expected JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("generated scenario #{index} is invalid: {reason}")]
    InvalidScenario { index: usize, reason: String },
    #[error("generation API returned an empty batch")]
    EmptyBatch,
}

/// Un intento de carga completo (generación + guardado)
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("could not persist the generated set: {0}")]
    Persist(#[from] CacheError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("only {loaded} of {required} scenarios loaded")]
    Incomplete { loaded: usize, required: usize },
    #[error("could not write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize scenarios: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
