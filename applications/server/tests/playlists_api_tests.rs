/// Playlist API tests
mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_road_trip_scenario() {
    let app = TestApp::new().await;

    let (status, playlist) = app
        .post("/api/playlists", json!({ "name": "Road Trip" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(playlist["id"], 1);
    assert_eq!(playlist["name"], "Road Trip");
    assert_eq!(playlist["description"], "");
    assert_eq!(playlist["musics"], json!([]));
    assert!(playlist["createdAt"].is_string());
    assert!(playlist["updatedAt"].is_string());

    let (status, track) = app
        .post("/api/playlists/1/musics", json!({ "music": "Song A" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(track["id"], 1);
    assert_eq!(track["music"], "Song A");
    assert_eq!(track["artist"], "Unknown Artist");

    let (status, body) = app
        .post("/api/playlists/1/musics", json!({ "music": "Song A" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Cette musique est déjà dans la playlist" }));

    let (_, playlist) = app.get("/api/playlists/1").await;
    assert_eq!(playlist["musics"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_sequential_ids() {
    let app = TestApp::new().await;

    for expected in 1..=5 {
        let (status, playlist) = app
            .post("/api/playlists", json!({ "name": format!("Mix {}", expected) }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(playlist["id"], expected);
    }

    let (_, all) = app.get("/api/playlists").await;
    assert_eq!(all.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_requires_name() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/playlists", json!({ "name": "   " }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Le nom de la playlist est requis");
}

#[tokio::test]
async fn test_add_music_alias_and_remove() {
    let app = TestApp::new().await;
    app.post("/api/playlists", json!({ "name": "Chill" })).await;
    let (_, before) = app.get("/api/playlists/1").await;

    let (status, track) = app
        .post(
            "/api/playlists/1/add-music",
            json!({ "music": "Veridis Quo", "deezerId": 3135560 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(track["deezerId"], 3135560);

    // Same Deezer id under another title is still a duplicate
    let (status, _) = app
        .post(
            "/api/playlists/1/musics",
            json!({ "music": "Veridis Quo (Live)", "deezerId": 3135560 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.delete("/api/playlists/1/musics/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Musique supprimée de la playlist",
            "playlistId": 1,
            "musicId": 1
        })
    );

    let (_, after) = app.get("/api/playlists/1").await;
    assert_eq!(after["musics"], before["musics"]);
    assert_eq!(after["name"], before["name"]);
}

#[tokio::test]
async fn test_remove_missing_track() {
    let app = TestApp::new().await;
    app.post("/api/playlists", json!({ "name": "Empty" })).await;

    let (status, body) = app.delete("/api/playlists/1/musics/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Musique non trouvée dans la playlist");

    let (status, body) = app.delete("/api/playlists/2/musics/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Playlist non trouvée");
}

#[tokio::test]
async fn test_add_track_to_missing_playlist() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/api/playlists/42/musics", json!({ "music": "Digital Love" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Playlist non trouvée");
}

#[tokio::test]
async fn test_patch_playlist() {
    let app = TestApp::new().await;
    app.post("/api/playlists", json!({ "name": "Draft", "description": "wip" }))
        .await;

    let (status, playlist) = app
        .patch("/api/playlists/1", json!({ "name": "Final" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(playlist["name"], "Final");
    assert_eq!(playlist["description"], "wip");

    let (status, body) = app
        .patch("/api/playlists/1", json!({ "name": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Le nom de la playlist est requis");

    let (status, _) = app
        .patch("/api/playlists/9", json!({ "description": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_patch_keeps_updated_at() {
    let app = TestApp::new().await;
    let (_, created) = app.post("/api/playlists", json!({ "name": "Still" })).await;

    let (status, playlist) = app.patch("/api/playlists/1", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(playlist, created);
}

#[tokio::test]
async fn test_delete_playlist() {
    let app = TestApp::new().await;
    app.post("/api/playlists", json!({ "name": "Gone Soon" })).await;

    let (status, body) = app.delete("/api/playlists/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Playlist supprimée avec succès", "id": 1 })
    );

    let (status, body) = app.get("/api/playlists/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Playlist non trouvée");
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let app = TestApp::new().await;

    let mut handles = Vec::new();
    for i in 0..10 {
        let router = app.router.clone();
        handles.push(tokio::spawn(async move {
            let request = axum::http::Request::builder()
                .uri("/api/playlists")
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(
                    json!({ "name": format!("Parallel {}", i) }).to_string(),
                ))
                .unwrap();
            tower::util::ServiceExt::oneshot(router, request)
                .await
                .unwrap()
                .status()
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let (_, all) = app.get("/api/playlists").await;
    let mut ids: Vec<u64> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=10).collect::<Vec<u64>>());
}
