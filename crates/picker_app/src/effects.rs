use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use picker_core::{Effect, Msg, Phase, SessionEvent};
use picker_engine::{CatalogCache, EngineEvent, EngineHandle, EventSink};

use crate::app::Input;
use crate::config::AppConfig;

/// Forwards engine results into the app inbox as core messages.
struct InboxSink {
    tx: mpsc::Sender<Input>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        match event {
            // The engine already logged any failure; the core only needs to
            // know whether data arrived.
            EngineEvent::CatalogFetched { result } => {
                let _ = self.tx.send(Input::Msg(Msg::CatalogFetched(result.ok())));
            }
        }
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    cache: CatalogCache,
    inbox: mpsc::Sender<Input>,
    reveal_delay: Duration,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, cache: CatalogCache, inbox: mpsc::Sender<Input>) -> Self {
        let sink = Arc::new(InboxSink { tx: inbox.clone() });
        Self {
            engine: EngineHandle::new(config.fetch_settings(), sink),
            cache,
            inbox,
            reveal_delay: config.reveal_delay(),
        }
    }

    /// Executes IO effects and hands session notifications back to the caller.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchCatalog => {
                    engine_debug!("FetchCatalog");
                    self.engine.fetch_catalog();
                }
                Effect::PersistCatalog(catalog) => match self.cache.save(&catalog) {
                    Ok(()) => engine_info!("Cached {} agents", catalog.len()),
                    Err(err) => engine_warn!("Catalog cache write failed: {}", err),
                },
                Effect::Notify(event) => {
                    if event.phase == Phase::Drawing {
                        self.schedule_reveal();
                    }
                    events.push(event);
                }
            }
        }
        events
    }

    /// The pick is already fixed; this only decides when it is shown.
    fn schedule_reveal(&self) {
        let tx = self.inbox.clone();
        let delay = self.reveal_delay;
        thread::spawn(move || {
            thread::sleep(delay);
            let _ = tx.send(Input::Msg(Msg::RevealSettled));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_engine::{FailureKind, FetchError};

    #[test]
    fn fetch_failure_reaches_core_as_absent_payload() {
        let (tx, rx) = mpsc::channel();
        let sink = InboxSink { tx };
        sink.emit(EngineEvent::CatalogFetched {
            result: Err(FetchError {
                kind: FailureKind::Timeout,
                message: "slow".to_string(),
            }),
        });
        sink.emit(EngineEvent::CatalogFetched { result: Ok(Vec::new()) });

        assert!(matches!(rx.recv(), Ok(Input::Msg(Msg::CatalogFetched(None)))));
        assert!(matches!(
            rx.recv(),
            Ok(Input::Msg(Msg::CatalogFetched(Some(records)))) if records.is_empty()
        ));
    }
}
