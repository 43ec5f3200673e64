//! Error types for `rolo-core`.

use thiserror::Error;

/// An error returned by a [`ContactService`](crate::service::ContactService)
/// operation.
///
/// `E` is the backend's own error type; store failures pass through
/// untranslated so the boundary layer can treat them as generic failures,
/// distinct from the two domain kinds.
#[derive(Debug, Error)]
pub enum Error<E: std::error::Error + 'static> {
  /// A required field is missing, a uniqueness constraint would be violated,
  /// or a phone/email value is malformed.
  #[error("{0}")]
  Validation(String),

  /// The referenced `fullname` does not exist.
  #[error("{0}")]
  NotFound(String),

  /// The store collaborator itself failed.
  #[error("store error: {0}")]
  Store(#[from] E),
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
