//! HTTP transport integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use advert_api::bus::InMemoryBroker;
use advert_api::{advert_service, service, Adverts, RecordStore};
use serde_json::{json, Value};

use crate::support::{flaky_app, in_memory_app, FlakyBroker, FlakyStore, TOPIC};

/// Bind to port 0 and return the base URL.
async fn start_server<S, P>(adverts: Adverts<S, P>) -> String
where
    S: RecordStore + 'static,
    P: advert_api::bus::Publisher + 'static,
{
    let app = service::router(Arc::new(advert_service(adverts)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn in_memory_server() -> (String, InMemoryBroker) {
    let (app, broker) = in_memory_app();
    (start_server(app).await, broker)
}

async fn flaky_server() -> (String, FlakyStore, FlakyBroker) {
    let (app, store, broker) = flaky_app();
    (start_server(app).await, store, broker)
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> String {
    let resp = client
        .post(format!("{base}/adverts/v1/create"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_check() {
    let (base, _broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["storage"], "healthy");
    let commands = body["commands"].as_array().unwrap();
    assert!(commands.iter().any(|c| c == "advert.confirm"));
}

#[tokio::test]
async fn health_reports_storage_outage() {
    let (base, store, _broker) = flaky_server().await;
    let client = reqwest::Client::new();

    store.set_down(true);
    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), 503);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn sofa_lifecycle_over_http() {
    let (base, broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let id = create(&client, &base, json!({ "title": "Sofa" })).await;

    let resp = client.get(format!("{base}/adverts/v1/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": id, "title": "Sofa", "status": "Pending" }));

    let resp = client
        .put(format!("{base}/adverts/v1/confirm"))
        .json(&json!({ "id": id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["notified"], true);

    let resp = client.get(format!("{base}/adverts/v1/{id}")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Confirmed");
    assert_eq!(body["title"], "Sofa");

    let messages = broker.messages_on(TOPIC);
    assert_eq!(messages.len(), 1);
    let payload: Value = messages[0].decode_json().unwrap();
    assert_eq!(payload, json!({ "id": id, "title": "Sofa" }));
}

#[tokio::test]
async fn confirm_unknown_returns_404() {
    let (base, broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .put(format!("{base}/adverts/v1/confirm"))
        .json(&json!({ "id": "does-not-exist" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(broker.is_empty());
}

#[tokio::test]
async fn get_unknown_returns_404() {
    let (base, _broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{base}/adverts/v1/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not found: does-not-exist");
}

#[tokio::test]
async fn reconfirm_returns_409() {
    let (base, broker) = in_memory_server().await;
    let client = reqwest::Client::new();
    let id = create(&client, &base, json!({ "title": "Sofa" })).await;

    for expected in [200, 409] {
        let resp = client
            .put(format!("{base}/adverts/v1/confirm"))
            .json(&json!({ "id": id }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), expected);
    }
    assert_eq!(broker.len(), 1);
}

#[tokio::test]
async fn create_without_title_returns_400() {
    let (base, _broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/adverts/v1/create"))
        .json(&json!({ "description": "no title" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn all_lists_every_advert_with_cors() {
    let (base, _broker) = in_memory_server().await;
    let client = reqwest::Client::new();

    let first = create(&client, &base, json!({ "title": "Sofa" })).await;
    create(&client, &base, json!({ "title": "Chair" })).await;
    client
        .put(format!("{base}/adverts/v1/confirm"))
        .json(&json!({ "id": first }))
        .send()
        .await
        .unwrap();

    let resp = client
        .get(format!("{base}/adverts/v1/all"))
        .header("origin", "https://example.com")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: Value = resp.json().await.unwrap();
    let adverts = body.as_array().unwrap();
    assert_eq!(adverts.len(), 2);
    assert_eq!(adverts.iter().filter(|a| a["status"] == "Confirmed").count(), 1);
}

#[tokio::test]
async fn storage_outage_returns_generic_500() {
    let (base, store, _broker) = flaky_server().await;
    let client = reqwest::Client::new();

    store.set_down(true);
    let resp = client.get(format!("{base}/adverts/v1/any-id")).send().await.unwrap();
    assert_eq!(resp.status(), 500);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn broker_outage_still_confirms() {
    let (base, _store, broker) = flaky_server().await;
    let client = reqwest::Client::new();
    let id = create(&client, &base, json!({ "title": "Sofa" })).await;

    broker.set_down(true);
    let resp = client
        .put(format!("{base}/adverts/v1/confirm"))
        .json(&json!({ "id": id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["notified"], false);
    assert_eq!(body["notify_error"], "notification failed");

    let resp = client.get(format!("{base}/adverts/v1/{id}")).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "Confirmed");
}
