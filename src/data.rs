// src/data.rs

use crate::error::CacheError;
use crate::model::{Scenario, TOTAL_GOAL};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Almacén duradero de una sola clave para el set de escenarios (JSON crudo)
pub trait ScenarioStore {
    fn read(&self) -> Result<Option<String>, CacheError>;
    fn write(&self, json: &str) -> Result<(), CacheError>;
    fn remove(&self) -> Result<(), CacheError>;
}

/// El set guardado en un fichero JSON
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScenarioStore for FileStore {
    fn read(&self) -> Result<Option<String>, CacheError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, json: &str) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), CacheError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Carga el set guardado.
///
/// `Ok(None)` si no hay nada guardado. Un set ilegible o con menos de
/// `TOTAL_GOAL` escenarios se devuelve como error; quien llama lo trata
/// como un fallo de caché, no como algo fatal. Si hay más de los
/// necesarios se devuelven todos, sin recortar.
pub fn load_scenarios(store: &dyn ScenarioStore) -> Result<Option<Vec<Scenario>>, CacheError> {
    let Some(json) = store.read()? else {
        return Ok(None);
    };
    let scenarios: Vec<Scenario> = serde_json::from_str(&json).map_err(CacheError::Corrupt)?;
    if scenarios.len() < TOTAL_GOAL {
        return Err(CacheError::TooShort {
            len: scenarios.len(),
            required: TOTAL_GOAL,
        });
    }
    Ok(Some(scenarios))
}

pub fn save_scenarios(store: &dyn ScenarioStore, scenarios: &[Scenario]) -> Result<(), CacheError> {
    let json = serde_json::to_string(scenarios).map_err(CacheError::Serialize)?;
    store.write(&json)
}

pub fn delete_scenarios(store: &dyn ScenarioStore) -> Result<(), CacheError> {
    store.remove()
}
