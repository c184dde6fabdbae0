use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info, engine_warn};

use crate::fetch::{fetch_agents, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

/// Receiver of engine events. Called from the engine's worker thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FetchCatalog,
}

/// Handle to the background fetch worker.
///
/// Dropping the handle stops the worker; a fetch still in flight is
/// abandoned and its result never reaches the sink.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings, sink: Arc<dyn EventSink>) -> Self {
        let fetcher = Arc::new(ReqwestFetcher::new(settings.clone()));
        Self::with_fetcher(settings, fetcher, sink)
    }

    pub fn with_fetcher(
        settings: FetchSettings,
        fetcher: Arc<dyn Fetcher>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("Failed to start fetch runtime: {}", err);
                    while let Ok(EngineCommand::FetchCatalog) = cmd_rx.recv() {
                        sink.emit(EngineEvent::CatalogFetched {
                            result: Err(FetchError::new(
                                FailureKind::Network,
                                "fetch runtime unavailable",
                            )),
                        });
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let sink = sink.clone();
                let settings = settings.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), &settings, command, sink.as_ref()).await;
                });
            }
        });

        Self { cmd_tx }
    }

    pub fn fetch_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::FetchCatalog);
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    settings: &FetchSettings,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::FetchCatalog => {
            engine_info!("Fetching catalog from {}", settings.endpoint);
            let result = fetch_agents(fetcher, &settings.endpoint, settings.deadline).await;
            if let Err(err) = &result {
                engine_warn!("Catalog fetch failed: {}", err);
            }
            sink.emit(EngineEvent::CatalogFetched { result });
        }
    }
}
