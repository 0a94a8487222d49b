//! Arranque: caché primero y, si no sirve, generación por lotes.

use crate::data::{self, ScenarioStore};
use crate::error::{GenerationError, LoadError};
use crate::generator::ScenarioProvider;
use crate::model::{BATCH_SIZE, Scenario, TOTAL_GOAL};
use crossbeam_channel::{Receiver, unbounded};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEvent {
    FetchStarted,
    Progress(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub scenarios: Vec<Scenario>,
    pub from_cache: bool,
}

/// Mensajes del hilo de carga hacia la UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMessage {
    FetchStarted,
    Progress(usize),
    Finished(Vec<Scenario>),
    Failed(String),
}

impl From<LoadEvent> for LoadMessage {
    fn from(event: LoadEvent) -> Self {
        match event {
            LoadEvent::FetchStarted => LoadMessage::FetchStarted,
            LoadEvent::Progress(n) => LoadMessage::Progress(n),
        }
    }
}

/// Transición de arranque completa.
///
/// Si la caché tiene al menos `TOTAL_GOAL` escenarios se usa tal cual y no
/// se llama al generador. Si no, se piden lotes hasta llegar al total y el
/// set se guarda antes de devolverlo.
pub fn initialize(
    store: &dyn ScenarioStore,
    provider: &dyn ScenarioProvider,
    mut on_event: impl FnMut(LoadEvent),
) -> Result<LoadOutcome, LoadError> {
    match data::load_scenarios(store) {
        Ok(Some(scenarios)) => {
            log::info!("using cached set of {} scenarios", scenarios.len());
            return Ok(LoadOutcome {
                scenarios,
                from_cache: true,
            });
        }
        Ok(None) => log::info!("no cached set, generating {TOTAL_GOAL} scenarios"),
        Err(e) => log::warn!("cached set unusable, regenerating: {e}"),
    }

    on_event(LoadEvent::FetchStarted);
    let scenarios = fetch_all(provider, &mut on_event)?;
    data::save_scenarios(store, &scenarios)?;
    log::info!("saved {} scenarios", scenarios.len());

    Ok(LoadOutcome {
        scenarios,
        from_cache: false,
    })
}

/// Pide lotes de `BATCH_SIZE` uno detrás de otro hasta tener `TOTAL_GOAL`
pub fn fetch_all(
    provider: &dyn ScenarioProvider,
    on_event: &mut impl FnMut(LoadEvent),
) -> Result<Vec<Scenario>, GenerationError> {
    let mut all: Vec<Scenario> = Vec::with_capacity(TOTAL_GOAL);
    while all.len() < TOTAL_GOAL {
        let offset = all.len();
        let batch = provider.fetch(BATCH_SIZE, offset).map_err(|e| {
            log::error!("batch at offset {offset} failed: {e}");
            e
        })?;
        if batch.is_empty() {
            return Err(GenerationError::EmptyBatch);
        }
        all.extend(batch);
        all.truncate(TOTAL_GOAL);
        log::debug!("{} / {TOTAL_GOAL} scenarios loaded", all.len());
        on_event(LoadEvent::Progress(all.len()));
    }
    Ok(all)
}

/// Lanza `initialize` en un hilo aparte y devuelve el canal de mensajes
pub fn spawn_loader<S, P>(store: S, provider: P) -> Receiver<LoadMessage>
where
    S: ScenarioStore + Send + 'static,
    P: ScenarioProvider + Send + 'static,
{
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let result = initialize(&store, &provider, |event| {
            let _ = tx.send(event.into());
        });
        let message = match result {
            Ok(outcome) => LoadMessage::Finished(outcome.scenarios),
            Err(e) => {
                log::error!("loading failed: {e}");
                LoadMessage::Failed(e.to_string())
            }
        };
        let _ = tx.send(message);
    });
    rx
}
