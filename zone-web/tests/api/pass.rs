use crate::common::{TestServer, cell, stone_count};

#[tokio::test]
async fn single_pass_toggles_turn() {
    let server = TestServer::start().await;
    server.play(4, 4).await;

    let resp = server.post("/pass").await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["turn"], "R");
    assert_eq!(resp["stage"], "red_to_move");
    assert_eq!(stone_count(&resp), 1);
    assert!(resp.get("result").is_none());
}

#[tokio::test]
async fn consecutive_passes_end_the_game() {
    let server = TestServer::start().await;
    server.play(0, 0).await;
    server.play(1, 0).await;
    server.play(2, 0).await; // Red captures one

    server.post("/pass").await;
    let resp = server.post("/pass").await;

    assert_eq!(resp["stage"], "game_over");
    assert_eq!(resp["result"], "Red wins 1-0 (both players passed)");
}

#[tokio::test]
async fn actions_after_game_over_are_rejected() {
    let server = TestServer::start().await;
    server.post("/pass").await;
    server.post("/pass").await;

    let moved = server.play(5, 5).await;
    assert_eq!(moved["success"], false);
    assert_eq!(moved["error"], "game_over");

    let passed = server.post("/pass").await;
    assert_eq!(passed["success"], false);
    assert_eq!(passed["error"], "game_over");
}

#[tokio::test]
async fn rejected_pass_still_returns_the_board() {
    let server = TestServer::start().await;
    server.play(3, 6).await;
    server.post("/pass").await;
    server.post("/pass").await;

    let resp = server.post("/pass").await;
    assert_eq!(resp["success"], false);
    assert_eq!(resp["error"], "game_over");
    let board = resp["board"].as_array().expect("board present on rejected pass");
    assert_eq!(board.len(), 10);
    assert!(board.iter().all(|column| column.as_array().unwrap().len() == 10));
    assert_eq!(cell(&resp, 3, 6), "R");
    assert_eq!(stone_count(&resp), 1);
}

/// Place, place, undo, pass, pass: the game ends as a draw.
#[tokio::test]
async fn full_scenario_ends_in_draw() {
    let server = TestServer::start().await;

    let red = server.play(4, 4).await;
    assert_eq!(red["success"], true);
    let blue = server.play(4, 5).await;
    assert_eq!(blue["success"], true);

    let undone = server.post("/undo").await;
    assert_eq!(stone_count(&undone), 1);
    assert_eq!(undone["turn"], "B");

    server.post("/pass").await;
    let end = server.post("/pass").await;
    assert_eq!(end["stage"], "game_over");
    assert_eq!(end["result"], "Draw 0-0 (both players passed)");
}
