use std::sync::{mpsc, Arc};
use std::time::Duration;

use picker_engine::{
    ChannelEventSink, EngineEvent, EngineHandle, FailureKind, FetchSettings,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(endpoint: String) -> FetchSettings {
    FetchSettings {
        endpoint,
        ..FetchSettings::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn handle_delivers_fetched_records_to_sink() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "uuid": "u-1", "displayName": "Reyna", "role": { "displayName": "Duelist" } } ]
        })))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::new(
        settings_for(format!("{}/v1/agents", server.uri())),
        Arc::new(ChannelEventSink::new(tx)),
    );
    handle.fetch_catalog();

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("engine event");
    let EngineEvent::CatalogFetched { result } = event;
    let records = result.expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name.as_deref(), Some("Reyna"));
}

#[tokio::test(flavor = "multi_thread")]
async fn handle_reports_failures_to_sink() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::new(
        settings_for(format!("{}/v1/agents", server.uri())),
        Arc::new(ChannelEventSink::new(tx)),
    );
    handle.fetch_catalog();

    let event = tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("engine event");
    let EngineEvent::CatalogFetched { result } = event;
    assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(503));
}
