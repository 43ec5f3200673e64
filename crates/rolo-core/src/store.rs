//! The `DocumentStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! The service layer depends on this abstraction, not on any concrete
//! backend; one logical collection holds one document per contact, keyed by
//! `fullname`.

use std::future::Future;

use serde::Serialize;

use crate::contact::Contact;

// ─── Query types ─────────────────────────────────────────────────────────────

/// A pagination window for [`DocumentStore::search`].
///
/// `from` is passed to the store unchanged — the boundary layer decides what
/// it means (the list operation hands its page number straight through as
/// the offset).
#[derive(Debug, Clone, Copy)]
pub struct Page {
  pub from: u64,
  pub size: u64,
}

/// A contact field that supports exact phrase matching. Used for uniqueness
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhraseField {
  Fullname,
  Phone,
  Email,
}

impl PhraseField {
  /// The document field name this variant matches against.
  pub fn as_str(self) -> &'static str {
    match self {
      PhraseField::Fullname => "fullname",
      PhraseField::Phone => "phone",
      PhraseField::Email => "email",
    }
  }
}

// ─── Result types ────────────────────────────────────────────────────────────

/// A matched document plus the store metadata that came with it.
#[derive(Debug, Clone, Serialize)]
pub struct Hit {
  /// The document id (always the contact's `fullname`).
  pub id:      String,
  /// Relevance score, if the backend ranks results.
  pub score:   Option<f64>,
  /// The stored document itself.
  pub contact: Contact,
}

/// The raw result set of a keyword search, returned to the caller unprocessed.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
  /// Total number of matching documents, ignoring pagination.
  pub total: u64,
  /// The documents inside the requested window.
  pub hits:  Vec<Hit>,
}

/// The store's acknowledgment of a delete that found its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAck {
  /// The document was removed.
  Deleted,
  /// The store accepted the call but reports the document was not removed.
  NotDeleted,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the document store holding the address book.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait DocumentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the document with id `fullname`. Returns `None` if absent.
  fn get<'a>(
    &'a self,
    fullname: &'a str,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + 'a;

  /// Upsert `contact` under id `contact.fullname`.
  fn put<'a>(
    &'a self,
    contact: &'a Contact,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete the document with id `fullname`.
  ///
  /// Returns `None` if no such document exists; otherwise the store's
  /// acknowledgment of the removal.
  fn delete<'a>(
    &'a self,
    fullname: &'a str,
  ) -> impl Future<Output = Result<Option<DeleteAck>, Self::Error>> + Send + 'a;

  /// Count documents whose `field` equals `value` exactly.
  fn match_phrase<'a>(
    &'a self,
    field: PhraseField,
    value: &'a str,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Free-text keyword search over all fields with a pagination window.
  /// The query `"*"` matches every document.
  fn search<'a>(
    &'a self,
    query: &'a str,
    page: Page,
  ) -> impl Future<Output = Result<SearchResults, Self::Error>> + Send + 'a;
}
