//! Router-level integration tests, driving the axum app with
//! `tower::ServiceExt::oneshot` against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use rolo_core::ContactService;
use rolo_store_sqlite::SqliteStore;
use tower::ServiceExt as _;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  rolo_api::router(Arc::new(ContactService::new(store)))
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, String) {
  let response = app
    .clone()
    .oneshot(
      Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  let status = response.status();
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .unwrap();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

const CREATE_TOM: &str = "/contact?fullname=Tom%20Smith&firstname=Tom&lastname=Smith\
                          &phone=3014535496&email=TomSmith%40example.com";

// ─── Create + get ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_roundtrip() {
  let app = app().await;

  let (status, body) = send(&app, "POST", CREATE_TOM).await;
  assert_eq!(status, StatusCode::CREATED);
  assert_eq!(body, "Contact for Tom Smith has been successfully created.");

  let (status, body) = send(&app, "GET", "/contact/Tom%20Smith").await;
  assert_eq!(status, StatusCode::OK);
  let contact: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(contact["fullname"], "Tom Smith");
  assert_eq!(contact["firstname"], "Tom");
  assert_eq!(contact["lastname"], "Smith");
  assert_eq!(contact["phone"], "3014535496");
  assert_eq!(contact["email"], "TomSmith@example.com");
}

// ─── Error envelope ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_without_phone_is_bad_request() {
  let app = app().await;

  let (status, body) = send(
    &app,
    "POST",
    "/contact?fullname=Tom%20Smith&email=TomSmith%40example.com",
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let envelope: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(envelope["error"], "400 : Bad Request");
  assert!(
    envelope["message"]
      .as_str()
      .unwrap()
      .contains("phone number"),
    "unexpected message: {}",
    envelope["message"]
  );
}

#[tokio::test]
async fn get_unknown_contact_is_not_found() {
  let app = app().await;

  let (status, body) = send(&app, "GET", "/contact/Nobody").await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let envelope: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(envelope["error"], "404 : Not Found");
  assert!(
    envelope["message"]
      .as_str()
      .unwrap()
      .contains("Could not find contact"),
  );
}

#[tokio::test]
async fn duplicate_create_is_bad_request() {
  let app = app().await;

  send(&app, "POST", CREATE_TOM).await;
  let (status, body) = send(&app, "POST", CREATE_TOM).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);

  let envelope: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert!(
    envelope["message"].as_str().unwrap().contains("not unique"),
  );
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_returns_raw_search_results() {
  let app = app().await;

  send(&app, "POST", CREATE_TOM).await;
  send(
    &app,
    "POST",
    "/contact?fullname=Jane%20Doe&phone=4435567789&email=JaneDoe%40example.com",
  )
  .await;

  // Explicit zero offset: both contacts inside the window.
  let (status, body) = send(&app, "GET", "/contact?page=0").await;
  assert_eq!(status, StatusCode::OK);
  let results: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(results["total"], 2);
  assert_eq!(results["hits"].as_array().unwrap().len(), 2);
  assert_eq!(results["hits"][0]["id"], "Jane Doe");
  assert_eq!(results["hits"][0]["contact"]["phone"], "4435567789");

  // Default page=1 is handed through as the raw window offset, so the first
  // contact falls outside the window.
  let (_, body) = send(&app, "GET", "/contact").await;
  let results: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(results["total"], 2);
  assert_eq!(results["hits"].as_array().unwrap().len(), 1);

  // Keyword query narrows the set.
  let (_, body) = send(&app, "GET", "/contact?page=0&query=Jane").await;
  let results: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(results["total"], 1);
  assert_eq!(results["hits"][0]["id"], "Jane Doe");
}

// ─── Update + delete ──────────────────────────────────────────────────────────

#[tokio::test]
async fn update_then_delete_full_flow() {
  let app = app().await;

  send(&app, "POST", CREATE_TOM).await;

  let (status, body) = send(
    &app,
    "PUT",
    "/contact/Tom%20Smith?phone=4435567789&email=TomSmith2%40example.com",
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, "Contact Tom Smith has been successfully updated.");

  let (_, body) = send(&app, "GET", "/contact/Tom%20Smith").await;
  let contact: serde_json::Value = serde_json::from_str(&body).unwrap();
  assert_eq!(contact["firstname"], "Tom");
  assert_eq!(contact["phone"], "4435567789");
  assert_eq!(contact["email"], "TomSmith2@example.com");

  let (status, body) = send(&app, "DELETE", "/contact/Tom%20Smith").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    "Contact information for Tom Smith has successfully been deleted."
  );

  let (status, _) = send(&app, "GET", "/contact/Tom%20Smith").await;
  assert_eq!(status, StatusCode::NOT_FOUND);

  let (status, _) = send(&app, "DELETE", "/contact/Tom%20Smith").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_unknown_contact_is_not_found() {
  let app = app().await;

  let (status, _) = send(&app, "PUT", "/contact/Nobody?phone=4435567789").await;
  assert_eq!(status, StatusCode::NOT_FOUND);
}
