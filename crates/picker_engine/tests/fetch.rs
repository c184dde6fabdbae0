use std::time::Duration;

use picker_engine::{fetch_agents, FailureKind, FetchSettings, Fetcher, ReqwestFetcher};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn agents_body() -> serde_json::Value {
    json!({
        "status": 200,
        "data": [
            {
                "uuid": "add6443a-41bd-e414-f6ad-e58d267f4e95",
                "displayName": "Jett",
                "role": { "displayName": "Duelist" },
                "displayIcon": "https://media.example.com/jett/icon.png",
                "fullPortrait": "https://media.example.com/jett/portrait.png",
                "description": "Representing her home country of South Korea.",
                "abilities": [
                    { "slot": "Ability1", "displayName": "Updraft", "description": "Propel upwards." }
                ]
            },
            {
                "uuid": "569fdd95-4d10-43ab-ca70-79becc718b46",
                "displayName": "Sage",
                "role": { "displayName": "Sentinel" },
                "displayIcon": "https://media.example.com/sage/icon.png"
            }
        ]
    })
}

#[tokio::test]
async fn fetcher_returns_body_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{\"data\":[]}", "application/json; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/v1/agents", server.uri());

    let output = fetcher.fetch(&url).await.expect("fetch ok");
    assert_eq!(output.metadata.original_url, url);
    assert_eq!(output.metadata.final_url, output.metadata.original_url);
    assert_eq!(output.metadata.redirect_count, 0);
    assert!(output
        .metadata
        .content_type
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(output.bytes, b"{\"data\":[]}");
}

#[tokio::test]
async fn fetch_agents_decodes_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/agents"))
        .and(query_param("isPlayableCharacter", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(agents_body()))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/v1/agents?isPlayableCharacter=true", server.uri());

    let records = fetch_agents(&fetcher, &url, Duration::from_secs(5))
        .await
        .expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].display_name.as_deref(), Some("Jett"));
    assert_eq!(records[0].role.as_deref(), Some("Duelist"));
    assert_eq!(records[0].abilities.len(), 1);
    assert_eq!(records[1].full_portrait, None);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/missing", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "data": [] })),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/slow", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetch_agents_abandons_after_deadline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_json(agents_body()),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/slow", server.uri());

    let err = fetch_agents(&fetcher, &url, Duration::from_millis(50))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/large"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .insert_header("Content-Length", "11")
                .set_body_string("01234567890"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings);
    let url = format!("{}/large", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn fetcher_rejects_html_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/html", server.uri());

    let err = fetcher.fetch(&url).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetch_agents_reports_wrong_shape_as_invalid_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/shape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "agents": [] })))
        .mount(&server)
        .await;

    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let url = format!("{}/shape", server.uri());

    let err = fetch_agents(&fetcher, &url, Duration::from_secs(5))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidPayload);
}

#[tokio::test]
async fn invalid_url_is_reported() {
    let fetcher = ReqwestFetcher::new(FetchSettings::default());
    let err = fetcher.fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
