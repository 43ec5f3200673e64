//! Handlers for the `/contact` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contact` | `?pageSize=&page=&query=`; pageSize clamped to 30 |
//! | `POST`   | `/contact` | `?fullname=&firstname=&lastname=&phone=&email=` |
//! | `GET`    | `/contact/{fullname}` | 404 if not found |
//! | `PUT`    | `/contact/{fullname}` | `?firstname=&lastname=&phone=&email=` |
//! | `DELETE` | `/contact/{fullname}` | message body for both delete outcomes |
//!
//! All write parameters travel as query parameters, with omitted parameters
//! defaulting to the empty string.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rolo_core::{
  Contact, ContactService, ContactUpdate,
  store::{DocumentStore, SearchResults},
};
use serde::Deserialize;

use crate::error::ApiError;

/// Upper bound on `pageSize`; larger requests are clamped, not rejected.
const MAX_PAGE_SIZE: u64 = 30;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  #[serde(rename = "pageSize", default = "default_page_size")]
  pub page_size: u64,
  #[serde(default = "default_page")]
  pub page:      u64,
  #[serde(default = "default_query")]
  pub query:     String,
}

fn default_page_size() -> u64 {
  10
}

fn default_page() -> u64 {
  1
}

fn default_query() -> String {
  "*".to_owned()
}

/// `GET /contact[?pageSize=...][&page=...][&query=...]`
pub async fn list<S>(
  State(service): State<Arc<ContactService<S>>>,
  Query(params): Query<ListParams>,
) -> Result<Json<SearchResults>, ApiError>
where
  S: DocumentStore,
{
  let page_size = params.page_size.min(MAX_PAGE_SIZE);
  let results = service
    .list(page_size, params.page, &params.query)
    .await
    .map_err(ApiError::from_core)?;
  Ok(Json(results))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateParams {
  #[serde(default)]
  pub fullname:  String,
  #[serde(default)]
  pub firstname: String,
  #[serde(default)]
  pub lastname:  String,
  #[serde(default)]
  pub phone:     String,
  #[serde(default)]
  pub email:     String,
}

/// `POST /contact?fullname=...&firstname=...&lastname=...&phone=...&email=...`
pub async fn create<S>(
  State(service): State<Arc<ContactService<S>>>,
  Query(params): Query<CreateParams>,
) -> Result<impl IntoResponse, ApiError>
where
  S: DocumentStore,
{
  let contact = Contact {
    fullname:  params.fullname,
    firstname: params.firstname,
    lastname:  params.lastname,
    phone:     params.phone,
    email:     params.email,
  };

  let message = service
    .create(contact)
    .await
    .map_err(ApiError::from_core)?;
  Ok((StatusCode::CREATED, message))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contact/{fullname}`
pub async fn get_one<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(fullname): Path<String>,
) -> Result<Json<Contact>, ApiError>
where
  S: DocumentStore,
{
  let contact = service
    .get(&fullname)
    .await
    .map_err(ApiError::from_core)?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contact/{fullname}?firstname=...&lastname=...&phone=...&email=...`
///
/// Empty or omitted parameters leave the stored field unchanged.
pub async fn update<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(fullname): Path<String>,
  Query(update): Query<ContactUpdate>,
) -> Result<String, ApiError>
where
  S: DocumentStore,
{
  service
    .update(&fullname, &update)
    .await
    .map_err(ApiError::from_core)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contact/{fullname}`
///
/// Both delete outcomes — removed and not-acknowledged — are 200s with a
/// message body; only an absent contact is a 404.
pub async fn delete_one<S>(
  State(service): State<Arc<ContactService<S>>>,
  Path(fullname): Path<String>,
) -> Result<String, ApiError>
where
  S: DocumentStore,
{
  let outcome = service
    .delete(&fullname)
    .await
    .map_err(ApiError::from_core)?;
  Ok(outcome.to_string())
}
