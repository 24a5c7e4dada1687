//! Word list API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::fixtures::{self, CAT_DEFINITION, CAT_TRANSLATION, CAT_WORD};
use common::TestContext;

/// Test adding a word returns a fresh record.
#[tokio::test]
async fn test_add_word_creates_fresh_record() {
    let ctx = TestContext::new();

    let body = ctx
        .add_word(&format!("  {}  ", CAT_WORD), CAT_DEFINITION, CAT_TRANSLATION)
        .await;

    assert_eq!(body["word"], CAT_WORD);
    assert_eq!(body["translation"], CAT_TRANSLATION);
    assert_eq!(body["timesWrong"], 0);
    assert_eq!(body["timesCorrect"], 0);
    assert_eq!(body["level"], 1);
    assert!(body["id"].as_i64().is_some());
}

/// Test blank fields are rejected and nothing is stored.
#[tokio::test]
async fn test_add_word_rejects_blank_field() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/words")
        .json(&fixtures::add_word_request(CAT_WORD, "   ", CAT_TRANSLATION))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation_error");

    let list: serde_json::Value = ctx.server.get("/api/words").await.json();
    assert_eq!(list["words"].as_array().unwrap().len(), 0);
}

/// Test a single word can be fetched and missing ids are 404.
#[tokio::test]
async fn test_get_word() {
    let ctx = TestContext::new();
    let created = ctx.add_word(CAT_WORD, CAT_DEFINITION, CAT_TRANSLATION).await;
    let id = created["id"].as_i64().unwrap();

    let response = ctx.server.get(&format!("/api/words/{}", id)).await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body, created);

    let response = ctx.server.get(&format!("/api/words/{}", id + 1)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// Test deleting is idempotent.
#[tokio::test]
async fn test_delete_word_is_idempotent() {
    let ctx = TestContext::new();
    let created = ctx.add_word(CAT_WORD, CAT_DEFINITION, CAT_TRANSLATION).await;
    let path = format!("/api/words/{}", created["id"]);

    ctx.server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    ctx.server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);

    let list: serde_json::Value = ctx.server.get("/api/words").await.json();
    assert_eq!(list["words"].as_array().unwrap().len(), 0);
}

/// Test the list is ordered hardest first.
#[tokio::test]
async fn test_list_orders_by_difficulty() {
    let ctx = TestContext::new();
    ctx.add_word(CAT_WORD, CAT_DEFINITION, CAT_TRANSLATION).await;

    // One word only, so the quiz always picks it.
    let question = ctx.start_quiz().await;
    ctx.answer(&question["sessionId"], "dog").await.assert_status_ok();

    ctx.add_word("dog", "a domesticated canine", "כלב").await;

    let list: serde_json::Value = ctx.server.get("/api/words").await.json();
    let words: Vec<&str> = list["words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect();
    assert_eq!(words, vec![CAT_WORD, "dog"]);
}

/// Test words saved with text ids stay reachable by that id.
#[tokio::test]
async fn test_text_ids_are_served_and_deleted() {
    let ctx = TestContext::with_saved_words(
        r#"[{"id": "w-1", "word": "cat", "definition": "feline", "translation": "חתול",
             "timesWrong": 0, "timesCorrect": 0, "lastSeen": "2024-03-01T10:00:00Z", "level": 1}]"#,
    );

    let response = ctx.server.get("/api/words/w-1").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["id"], "w-1");
    assert_eq!(body["word"], CAT_WORD);

    let added = ctx.add_word("dog", "a domesticated canine", "כלב").await;
    assert!(added["id"].as_i64().is_some());

    ctx.server
        .delete("/api/words/w-1")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    ctx.server
        .get("/api/words/w-1")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let list: serde_json::Value = ctx.server.get("/api/words").await.json();
    assert_eq!(list["words"].as_array().unwrap().len(), 1);
}
