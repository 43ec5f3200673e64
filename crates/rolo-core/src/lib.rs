//! Core types and trait definitions for the Rolo address book.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! It defines the contact record, its validation and merge rules, the
//! [`DocumentStore`](store::DocumentStore) abstraction over the backing
//! document store, and the [`ContactService`](service::ContactService) that
//! implements the five CRUD operations against it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod contact;
pub mod error;
pub mod service;
pub mod store;

pub use contact::{Contact, ContactUpdate};
pub use error::Error;
pub use service::{ContactService, DeleteOutcome};
