//! JSON REST API for the Rolo address book.
//!
//! Exposes an axum [`Router`] backed by any
//! [`DocumentStore`](rolo_core::store::DocumentStore). TLS, auth, and
//! transport concerns are the caller's responsibility; the router maps HTTP
//! onto [`ContactService`] calls and renders service errors as the JSON
//! error envelope (see [`error::ApiError`]).

pub mod contacts;
pub mod error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use rolo_core::{ContactService, store::DocumentStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and/or
/// `ROLO_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_owned()
}

fn default_port() -> u16 {
  5000
}

fn default_store_path() -> PathBuf {
  PathBuf::from("addressbook.db")
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `service`.
pub fn router<S>(service: Arc<ContactService<S>>) -> Router
where
  S: DocumentStore + 'static,
{
  Router::new()
    .route(
      "/contact",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contact/{fullname}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}
