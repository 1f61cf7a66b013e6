// tests/api_tests.rs

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use courage_profile::{
    config::Config,
    error::AppError,
    models::category::Category,
    notify::{Notifier, ResultsNotification},
    routes,
    state::AppState,
    storage::{MemorySubmissionStore, SubmissionStore},
};
use uuid::Uuid;

/// Notifier that records what it was asked to send.
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<ResultsNotification>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_results(&self, notification: &ResultsNotification) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Store whose database is always down.
struct BrokenStore;

#[async_trait]
impl SubmissionStore for BrokenStore {
    async fn save(&self, _: &courage_profile::models::submission::SubmissionRecord) -> Result<(), AppError> {
        Err(AppError::InternalServerError("connection refused".to_string()))
    }

    async fn find_top_two(&self, _: Uuid) -> Result<Option<[Category; 2]>, AppError> {
        Err(AppError::InternalServerError("connection refused".to_string()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::InternalServerError("connection refused".to_string()))
    }
}

fn test_config() -> Config {
    Config {
        database_url: None,
        rust_log: "error".to_string(),
        port: 0,
        public_base_url: url::Url::parse("https://courageprofile.test").unwrap(),
        resend_api_key: None,
        email_from: "Quiz <quiz@courageprofile.test>".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
    }
}

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app_with(store: Arc<dyn SubmissionStore>, notifier: Arc<RecordingNotifier>) -> String {
    let state = AppState {
        config: test_config(),
        store,
        notifier,
    };

    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn spawn_app() -> (String, Arc<MemorySubmissionStore>, Arc<RecordingNotifier>) {
    let store = Arc::new(MemorySubmissionStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let address = spawn_app_with(store.clone(), notifier.clone()).await;
    (address, store, notifier)
}

/// Answers for every question: Moral and Social get 5s, the rest 2s.
fn full_answers() -> serde_json::Value {
    let questions = courage_profile::models::question::QUESTION_BANK;
    let answers: serde_json::Map<String, serde_json::Value> = questions
        .iter()
        .enumerate()
        .map(|(index, q)| {
            let value = match q.category {
                Category::Moral | Category::Social => 5,
                _ => 2,
            };
            (index.to_string(), serde_json::json!(value))
        })
        .collect();
    serde_json::Value::Object(answers)
}

/// Polls until the background email task has run.
async fn wait_for_notifications(notifier: &RecordingNotifier, expected: usize) {
    for _ in 0..50 {
        if notifier.sent.lock().unwrap().len() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("expected {expected} notification(s)");
}

#[tokio::test]
async fn unknown_route_404() {
    // Arrange
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn lists_questions_by_page() {
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let all: serde_json::Value = client
        .get(&format!("{}/api/quiz/questions", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["total_questions"], 42);
    assert_eq!(all["total_pages"], 7);
    assert_eq!(all["questions"].as_array().unwrap().len(), 42);

    let page: serde_json::Value = client
        .get(&format!("{}/api/quiz/questions?page=1", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let questions = page["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert_eq!(questions[0]["index"], 6);
    assert_eq!(questions[0]["page"], 1);
    assert_eq!(questions[0]["category"], "Physical Courage");

    let missing = client
        .get(&format!("{}/api/quiz/questions?page=7", address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}

#[tokio::test]
async fn returns_likert_scale() {
    let (address, _, _) = spawn_app().await;

    let scale: serde_json::Value = reqwest::get(&format!("{}/api/quiz/scale", address))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let options = scale.as_array().unwrap();
    assert_eq!(options.len(), 5);
    assert_eq!(options[0]["label"], "Rarely");
    assert_eq!(options[4]["value"], 5);
}

#[tokio::test]
async fn scoring_empty_answers_falls_back_to_alphabetical() {
    let (address, store, notifier) = spawn_app().await;
    let client = reqwest::Client::new();

    let result: serde_json::Value = client
        .post(&format!("{}/api/quiz/score", address))
        .json(&serde_json::json!({ "answers": {} }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(result["total_score"], 0);
    assert_eq!(
        result["top_two"],
        serde_json::json!(["Emotional Courage", "Intellectual Courage"])
    );
    assert_eq!(result["ranked"].as_array().unwrap().len(), 6);
    for category in Category::ALL {
        assert_eq!(result["percentages"][category.label()], 0);
        assert_eq!(result["category_totals"][category.label()], 0);
    }

    // Scoring alone has no side effects.
    assert_eq!(store.len().await, 0);
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn scoring_breaks_ties_on_strongest_answer() {
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    // Physical: 3 + 5 (indices 0, 6). Emotional: 4 + 4 (indices 3, 9).
    let result: serde_json::Value = client
        .post(&format!("{}/api/quiz/score", address))
        .json(&serde_json::json!({ "answers": { "0": 3, "6": 5, "3": 4, "9": 4 } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(result["category_totals"]["Physical Courage"], 8);
    assert_eq!(result["category_totals"]["Emotional Courage"], 8);
    assert_eq!(
        result["top_two"],
        serde_json::json!(["Physical Courage", "Emotional Courage"])
    );
    assert_eq!(result["percentages"]["Physical Courage"], 50);
}

#[tokio::test]
async fn submit_stores_and_notifies() {
    let (address, store, notifier) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "first_name": "Ada",
            "email": "ada@example.com",
            "answers": full_answers(),
        }))
        .send()
        .await
        .expect("Submit failed");

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();

    assert_eq!(
        body["result"]["top_two"],
        serde_json::json!(["Moral Courage", "Social Courage"])
    );
    assert_eq!(body["result"]["total_score"], 7 * 5 * 2 + 7 * 2 * 4);

    let result_id: Uuid = body["result_id"].as_str().unwrap().parse().unwrap();
    let stored = store.get(result_id).await.expect("submission stored");
    assert_eq!(stored.first_name, "Ada");
    assert_eq!(stored.answers.len(), 42);
    assert_eq!(stored.top_two, [Category::Moral, Category::Social]);

    assert_eq!(
        body["share"]["text"],
        "I'm a The Wolf + The Dolphin — my Courage Signature. Discover yours at"
    );
    assert_eq!(
        body["share"]["result_url"],
        format!("https://courageprofile.test/results/{result_id}")
    );

    wait_for_notifications(&notifier, 1).await;
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent[0].email, "ada@example.com");
    assert_eq!(sent[0].result_id, result_id);
    assert_eq!(sent[0].result.top_two, [Category::Moral, Category::Social]);
}

#[tokio::test]
async fn submit_rejects_invalid_contact_details() {
    let (address, store, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "first_name": "Ada",
            "email": "not-an-email",
            "answers": full_answers(),
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(store.len().await, 0);
}

#[tokio::test]
async fn submit_survives_storage_outage() {
    let notifier = Arc::new(RecordingNotifier::default());
    let address = spawn_app_with(Arc::new(BrokenStore), notifier.clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "first_name": "Ada",
            "email": "ada@example.com",
            "answers": full_answers(),
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["result_id"].is_null());
    assert_eq!(
        body["result"]["top_two"],
        serde_json::json!(["Moral Courage", "Social Courage"])
    );
    assert!(body["share"]["result_url"].is_null());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn stats_count_goes_up_after_submit() {
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let before: serde_json::Value = client
        .get(&format!("{}/api/quiz/stats", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(before["submissions"], 0);

    let response = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "first_name": "Ada",
            "email": "ada@example.com",
            "answers": full_answers(),
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let after: serde_json::Value = client
        .get(&format!("{}/api/quiz/stats", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["submissions"], 1);
}

#[tokio::test]
async fn stats_report_storage_outage() {
    let address = spawn_app_with(Arc::new(BrokenStore), Arc::new(RecordingNotifier::default())).await;

    let response = reqwest::get(&format!("{}/api/quiz/stats", address))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Internal Server Error");
}

#[tokio::test]
async fn shared_result_flow() {
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .post(&format!("{}/api/quiz/submit", address))
        .json(&serde_json::json!({
            "first_name": "Grace",
            "email": "grace@example.com",
            "answers": { "4": 5, "5": 4 },
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let result_id = body["result_id"].as_str().unwrap();

    let shared: serde_json::Value = client
        .get(&format!("{}/api/results/{}", address, result_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(shared["headline"], "The Owl + The Butterfly");
    assert_eq!(shared["archetypes"][0]["category"], "Intellectual Courage");
    assert_eq!(shared["archetypes"][1]["tagline"], "Trust the vision before the evidence arrives.");

    let unknown = client
        .get(&format!("{}/api/results/{}", address, Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status().as_u16(), 404);

    let malformed = client
        .get(&format!("{}/api/results/not-a-uuid", address))
        .send()
        .await
        .unwrap();
    assert_eq!(malformed.status().as_u16(), 400);
}

#[tokio::test]
async fn archetypes_are_listed_and_looked_up() {
    let (address, _, _) = spawn_app().await;
    let client = reqwest::Client::new();

    let all: serde_json::Value = client
        .get(&format!("{}/api/archetypes", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.as_array().unwrap().len(), 6);
    assert_eq!(all[0]["title"], "The Lion");

    let owl: serde_json::Value = client
        .get(&format!("{}/api/archetypes/intellectual", address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(owl["title"], "The Owl");
    assert_eq!(owl["category"], "Intellectual Courage");

    let missing = client
        .get(&format!("{}/api/archetypes/financial", address))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}
