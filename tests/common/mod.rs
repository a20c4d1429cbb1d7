use std::net::SocketAddr;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use furo::catalog::Catalog;
use furo::config::Config;
use furo::state::SharedState;

/// A running test server instance serving its own catalog.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    #[allow(dead_code)]
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// GET a JSON endpoint, return (body, status).
    #[allow(dead_code)]
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a JSON body, return (body, status).
    #[allow(dead_code)]
    pub async fn post_json(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET an HTML page, return (body, status).
    #[allow(dead_code)]
    pub async fn get_html(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }

    /// POST a form-urlencoded body, return (html, status).
    #[allow(dead_code)]
    pub async fn post_form(&self, path: &str, data: &[(&str, &str)]) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .form(data)
            .send()
            .await
            .expect("post form failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

#[allow(dead_code)]
pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        ..Config::default()
    }
}

/// Spawn a test app over the built-in catalog.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Catalog::seed(), test_config()).await
}

#[allow(dead_code)]
pub async fn spawn_app_with(catalog: Catalog, config: Config) -> TestApp {
    let (app, state) = furo::build_app(catalog, config).expect("Failed to build app");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        state,
    }
}

/// A complete submission form as a browser would post it.
#[allow(dead_code)]
pub fn complete_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Geo Lookup API"),
        ("description", "Reverse geocoding for coordinates"),
        ("category", "IoT"),
        ("endpoint", "https://api.geo.example/v1/reverse"),
        ("price", "0.0002"),
        ("currency", "USDC"),
    ]
}
