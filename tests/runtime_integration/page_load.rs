use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde_json::{Value, json};

use super::support::spawn_server;

const FIREFOX_LINUX: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/118.0";
const CHROME_WINDOWS: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/118.0 Safari/537.36";

async fn load_page(client: &reqwest::Client, url: String, user_agent: Option<&str>) -> Value {
    let mut request = client.get(url);
    if let Some(user_agent) = user_agent {
        request = request.header(USER_AGENT, user_agent);
    }

    let response = request.send().await.expect("page load should return");
    assert!(response.status().is_success());
    response.json().await.expect("page load should return json")
}

#[tokio::test]
async fn firefox_user_agent_sets_flag() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let payload = load_page(&client, server.url("/"), Some(FIREFOX_LINUX)).await;
    assert_eq!(payload, json!({ "isFirefox": true }));

    let payload = load_page(&client, server.url("/"), Some("FIREFOX-bot/1.0")).await;
    assert_eq!(payload, json!({ "isFirefox": true }));

    server.stop().await;
}

#[tokio::test]
async fn other_user_agents_clear_flag() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let payload = load_page(&client, server.url("/"), Some(CHROME_WINDOWS)).await;
    assert_eq!(payload, json!({ "isFirefox": false }));

    let payload = load_page(&client, server.url("/"), Some("firefoxy/2.0")).await;
    assert_eq!(payload, json!({ "isFirefox": false }));

    server.stop().await;
}

#[tokio::test]
async fn missing_user_agent_clears_flag() {
    let server = spawn_server().await;
    // reqwest sends no User-Agent unless one is configured
    let client = reqwest::Client::new();

    let payload = load_page(&client, server.url("/"), None).await;
    assert_eq!(payload, json!({ "isFirefox": false }));

    server.stop().await;
}

#[tokio::test]
async fn obs_text_user_agent_is_still_matched() {
    let server = spawn_server().await;
    let client = reqwest::Client::new();

    let user_agent =
        HeaderValue::from_bytes(b"Mozilla/5.0 (Android; Caf\xe9 Phone) Gecko/120.0 Firefox/120.0")
            .expect("obs-text header value");
    let response = client
        .get(server.url("/"))
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .expect("page load should return");

    assert!(response.status().is_success());
    let payload: Value = response.json().await.expect("page load should return json");
    assert_eq!(payload, json!({ "isFirefox": true }));

    server.stop().await;
}

#[tokio::test]
async fn data_route_serves_uncached_json() {
    let server = spawn_server().await;

    let response = reqwest::Client::new()
        .get(server.url("/__data.json"))
        .header(USER_AGENT, FIREFOX_LINUX)
        .send()
        .await
        .expect("data route should return");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
    assert_eq!(
        response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok()),
        Some("no-store")
    );

    let payload: Value = response.json().await.expect("data route should return json");
    assert_eq!(payload["isFirefox"], true);

    server.stop().await;
}
