//! Integration tests for the AstroLife HTTP API.

use serde_json::{json, Value};
use server_http::routes::build_router;
use server_http::state::AppState;

async fn spawn_server() -> (tempfile::TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let state = AppState::open(temp_dir.path().join("kv.sled")).unwrap();
    let router = build_router(state, &["*".to_string()]);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (temp_dir, format!("http://{}", addr))
}

async fn register_user(client: &reqwest::Client, base: &str, email: &str) -> String {
    let response = client
        .post(format!("{}/auth/register", base))
        .json(&json!({ "name": "Asha", "email": email }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    body["user"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_check() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client.get(format!("{}/health", base)).send().await.unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], json!("OK"));
}

#[tokio::test]
async fn test_register_save_and_fetch_profile() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let user_id = register_user(&client, &base, "asha@example.com").await;

    let response = client
        .post(format!("{}/profile/save", base))
        .json(&json!({
            "user_id": user_id,
            "name": "Asha",
            "date_of_birth": "1992-03-14",
            "time_of_birth": "04:25",
            "place_of_birth": "Pune, India"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/profile/{}", base, user_id))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["profile"]["name"], json!("Asha"));
    assert_eq!(body["profile"]["place_of_birth"], json!("Pune, India"));
}

#[tokio::test]
async fn test_missing_profile_is_404() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/profile/no-such-user", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Profile not found"));
}

#[tokio::test]
async fn test_register_validation_and_duplicates() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    // No contact at all
    let response = client
        .post(format!("{}/auth/register", base))
        .json(&json!({ "name": "Nobody" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    register_user(&client, &base, "asha@example.com").await;

    // Same contact again
    let response = client
        .post(format!("{}/auth/register", base))
        .json(&json!({ "name": "Imposter", "email": "asha@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!("Account already exists"));
}

#[tokio::test]
async fn test_create_and_list_alerts() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let user_id = register_user(&client, &base, "asha@example.com").await;

    let response = client
        .get(format!("{}/alerts/{}", base, user_id))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["alerts"], json!([]));

    let response = client
        .post(format!("{}/alerts/create", base))
        .json(&json!({
            "user_id": user_id,
            "category": "health",
            "title": "Checkup",
            "message": "Schedule a routine checkup this week",
            "priority": "high",
            "action_required": true
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    let alert_id = body["alert_id"].as_str().unwrap();

    let response = client
        .get(format!("{}/alerts/{}", base, user_id))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let alerts = body["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["id"], json!(alert_id));
    assert_eq!(alerts[0]["category"], json!("health"));
}

#[tokio::test]
async fn test_celebrity_match() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/celebrity/match", base))
        .json(&json!({
            "user_profile": {
                "name": "Asha",
                "date_of_birth": "1992-03-14",
                "time_of_birth": "04:25",
                "place_of_birth": "Pune, India"
            }
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["name"], json!("Shah Rukh Khan"));

    let pct = matches[0]["match_percentage"].as_u64().unwrap();
    assert!((80..100).contains(&pct));
}

#[tokio::test]
async fn test_insights_require_a_profile() {
    let (_dir, base) = spawn_server().await;
    let client = reqwest::Client::new();

    let user_id = register_user(&client, &base, "asha@example.com").await;

    let response = client
        .post(format!("{}/insights/generate", base))
        .json(&json!({ "user_id": user_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    client
        .post(format!("{}/profile/save", base))
        .json(&json!({
            "user_id": user_id,
            "name": "Asha",
            "date_of_birth": "1992-03-14",
            "time_of_birth": "04:25",
            "place_of_birth": "Pune, India"
        }))
        .send()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/insights/generate", base))
        .json(&json!({ "user_id": user_id }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["insights"]["finance"]["message"],
        json!("Jupiter alignment favors long-term investments")
    );
    assert_eq!(body["insights"]["career"]["priority"], json!("high"));
}
