use serde_json::{Value, json};

use crate::common::{TestServer, cell, stone_count};

#[tokio::test]
async fn place_stone() {
    let server = TestServer::start().await;
    let resp = server.play(4, 4).await;

    assert_eq!(resp["success"], true);
    assert_eq!(cell(&resp, 4, 4), "R");
    assert_eq!(resp["captured_red"], 0);
    assert_eq!(resp["captured_blue"], 0);
    assert_eq!(resp["turn"], "B");
    assert_eq!(stone_count(&resp), 1);
}

/// The board is indexed `board[x][y]`, matching the browser client.
#[tokio::test]
async fn board_axis_convention() {
    let server = TestServer::start().await;
    server.play(2, 7).await;
    let resp = server.play(7, 2).await;

    assert_eq!(cell(&resp, 2, 7), "R");
    assert_eq!(cell(&resp, 7, 2), "B");
    assert_eq!(cell(&resp, 7, 7), Value::Null);
}

#[tokio::test]
async fn occupied_is_rejected_without_board() {
    let server = TestServer::start().await;
    server.play(0, 0).await;
    let resp = server.play(0, 0).await;

    assert_eq!(resp["success"], false);
    assert_eq!(resp["error"], "occupied");
    assert!(resp.get("board").is_none());
    assert_eq!(resp["turn"], "B");

    // State is unchanged
    let state = server.get("/state").await;
    assert_eq!(stone_count(&state), 1);
}

#[tokio::test]
async fn out_of_bounds_is_rejected() {
    let server = TestServer::start().await;
    for (x, y) in [(10, 0), (0, 10), (-1, 3), (3, -1), (100_000, 0)] {
        let resp = server.play(x, y).await;
        assert_eq!(resp["success"], false, "({x}, {y})");
        assert_eq!(resp["error"], "out_of_bounds", "({x}, {y})");
    }
    assert_eq!(server.get("/state").await["turn"], "R");
}

#[tokio::test]
async fn sandwiched_placement_is_rejected() {
    let server = TestServer::start().await;
    server.play(9, 9).await; // R
    server.play(3, 0).await; // B
    server.play(9, 7).await; // R
    server.play(5, 0).await; // B

    let resp = server.play(4, 0).await;
    assert_eq!(resp["success"], false);
    assert_eq!(resp["error"], "illegal_placement");
}

#[tokio::test]
async fn capture_updates_counter() {
    let server = TestServer::start().await;
    server.play(0, 0).await; // R
    server.play(1, 0).await; // B
    let resp = server.play(2, 0).await; // R captures (1, 0)

    assert_eq!(resp["success"], true);
    assert_eq!(resp["captured_red"], 1);
    assert_eq!(resp["captured_blue"], 0);
    assert_eq!(cell(&resp, 1, 0), Value::Null);
}

#[tokio::test]
async fn malformed_body_is_client_error() {
    let server = TestServer::start().await;
    let resp = server
        .client
        .post(server.url("/move"))
        .json(&json!({"x": "four"}))
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn legal_moves_exclude_sandwiched_points() {
    let server = TestServer::start().await;
    let initial = server.get("/state").await;
    assert_eq!(initial["legal_moves"].as_array().unwrap().len(), 100);

    server.play(9, 9).await;
    server.play(0, 5).await;
    server.play(9, 7).await;
    let resp = server.play(2, 5).await;

    let legal = resp["legal_moves"].as_array().unwrap();
    assert_eq!(legal.len(), 100 - 5);
    assert!(!legal.contains(&json!([1, 5])));
    assert!(legal.contains(&json!([1, 4])));
}
