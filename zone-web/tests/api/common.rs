#![allow(dead_code)]

use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A running test server bound to an ephemeral port.
pub struct TestServer {
    pub addr: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        let (router, _state) = zone_web::build_router(None);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();

        tokio::spawn(async move {
            use axum::extract::Request;
            use tower::Layer as _;
            use tower_http::normalize_path::NormalizePathLayer;

            let app = NormalizePathLayer::trim_trailing_slash().layer(router);
            axum::serve(
                listener,
                axum::ServiceExt::<Request>::into_make_service(app),
            )
            .await
            .unwrap();
        });

        TestServer {
            addr,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// POST with an empty body and return the JSON response. Asserts 2xx.
    pub async fn post(&self, path: &str) -> Value {
        let resp = self.client.post(self.url(path)).send().await.unwrap();
        assert!(
            resp.status().is_success(),
            "POST {path} failed: {}",
            resp.status()
        );
        resp.json().await.unwrap()
    }

    /// GET and return the JSON response. Asserts 2xx.
    pub async fn get(&self, path: &str) -> Value {
        let resp = self.client.get(self.url(path)).send().await.unwrap();
        assert!(
            resp.status().is_success(),
            "GET {path} failed: {}",
            resp.status()
        );
        resp.json().await.unwrap()
    }

    /// Place a stone in the default game.
    pub async fn play(&self, x: i64, y: i64) -> Value {
        self.play_in("", x, y).await
    }

    /// Place a stone under a route prefix, e.g. `/games/3`.
    pub async fn play_in(&self, prefix: &str, x: i64, y: i64) -> Value {
        let resp = self
            .client
            .post(self.url(&format!("{prefix}/move")))
            .json(&json!({"x": x, "y": y}))
            .send()
            .await
            .unwrap();
        assert!(
            resp.status().is_success(),
            "move failed: {}",
            resp.status()
        );
        resp.json().await.unwrap()
    }

    /// Create a separate game. Returns its id.
    pub async fn create_game(&self) -> i64 {
        let resp = self.client.post(self.url("/games")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
        let body: Value = resp.json().await.unwrap();
        body["game_id"].as_i64().expect("game id missing from response")
    }
}

/// Read a cell from a response board, indexed `board[x][y]`.
pub fn cell(body: &Value, x: usize, y: usize) -> Value {
    body["board"][x][y].clone()
}

/// Number of stones on a response board.
pub fn stone_count(body: &Value) -> usize {
    body["board"]
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|column| column.as_array().unwrap())
        .filter(|c| !c.is_null())
        .count()
}
