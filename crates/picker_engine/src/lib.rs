//! Agent picker engine: remote catalog fetch and the local key/value cache.
mod cache;
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use cache::{CatalogCache, CATALOG_KEY};
pub use decode::{decode_agents, DecodeError};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use fetch::{fetch_agents, FetchSettings, Fetcher, ReqwestFetcher, DEFAULT_ENDPOINT};
pub use persist::{ensure_cache_dir, AtomicFileWriter, KeyValueStore, PersistError};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
