use crate::common::{TestServer, stone_count};

#[tokio::test]
async fn reset_clears_everything() {
    let server = TestServer::start().await;
    server.play(0, 0).await;
    server.play(1, 0).await;
    server.play(2, 0).await;
    server.post("/pass").await;
    server.post("/pass").await;

    let resp = server.post("/reset").await;
    assert_eq!(resp["success"], true);
    assert_eq!(resp["captured_red"], 0);
    assert_eq!(resp["captured_blue"], 0);
    assert_eq!(resp["turn"], "R");
    assert_eq!(resp["stage"], "red_to_move");
    assert_eq!(stone_count(&resp), 0);
    assert!(resp.get("result").is_none());

    // Nothing left to undo after a reset
    let undone = server.post("/undo").await;
    assert_eq!(stone_count(&undone), 0);
    assert_eq!(undone["turn"], "R");
}
