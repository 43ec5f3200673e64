//! The contact service — the five CRUD operations over a [`DocumentStore`].
//!
//! Orchestrates validation, uniqueness checks, and persistence calls. All
//! domain failures come back as typed [`Error`] values; nothing is thrown
//! across this boundary, and HTTP status mapping is the caller's concern.
//!
//! Uniqueness is enforced by a phrase-match query *followed by* the write.
//! The two steps are not atomic: two concurrent creates or updates can both
//! pass their check before either writes. This matches the backing store's
//! non-transactional contract and is a known limitation, not an invariant.

use std::fmt;

use crate::{
  contact::{self, Contact, ContactUpdate},
  error::{Error, Result},
  store::{DeleteAck, DocumentStore, Page, PhraseField, SearchResults},
};

// ─── Delete outcome ──────────────────────────────────────────────────────────

/// The result of a delete that found its contact.
///
/// `NotAcknowledged` is a business-level failure reported by the store on an
/// otherwise successful call — deliberately a value, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
  Deleted { fullname: String },
  NotAcknowledged { fullname: String },
}

impl fmt::Display for DeleteOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeleteOutcome::Deleted { fullname } => write!(
        f,
        "Contact information for {fullname} has successfully been deleted."
      ),
      DeleteOutcome::NotAcknowledged { fullname } => {
        write!(f, "Error: The contact {fullname} could not be deleted.")
      }
    }
  }
}

// ─── Service ─────────────────────────────────────────────────────────────────

/// The address-book service, generic over its store backend.
///
/// The store handle is injected at construction time; the service holds no
/// other state and caches nothing across calls.
#[derive(Clone)]
pub struct ContactService<S> {
  store: S,
}

impl<S: DocumentStore> ContactService<S> {
  pub fn new(store: S) -> Self {
    Self { store }
  }

  /// Keyword search over all contacts.
  ///
  /// `page` is handed to the store unchanged as the window offset; `query`
  /// defaults to `"*"` (match-all) at the boundary layer. The raw result set
  /// comes back unprocessed.
  pub async fn list(
    &self,
    page_size: u64,
    page: u64,
    query: &str,
  ) -> Result<SearchResults, S::Error> {
    let page = Page { from: page, size: page_size };
    Ok(self.store.search(query, page).await?)
  }

  /// Create a new contact.
  ///
  /// Validates required fields and formats, then checks that `fullname`,
  /// `phone`, and `email` are each unused before writing. On success returns
  /// a message identifying the new contact.
  pub async fn create(&self, contact: Contact) -> Result<String, S::Error> {
    if contact.fullname.is_empty() {
      return Err(Error::Validation(
        "Please provide a unique name for the new Contact.".into(),
      ));
    }
    if contact.phone.is_empty() {
      return Err(Error::Validation(
        "Please provide a phone number for the new Contact.".into(),
      ));
    }
    if contact.email.is_empty() {
      return Err(Error::Validation(
        "Please provide an email for the new Contact.".into(),
      ));
    }

    if self
      .store
      .match_phrase(PhraseField::Fullname, &contact.fullname)
      .await?
      > 0
    {
      return Err(Error::Validation(format!(
        "Name {} is not unique. Please enter a unique name.",
        contact.fullname
      )));
    }

    if !contact::valid_phone(&contact.phone) {
      return Err(Error::Validation(malformed_phone()));
    }
    if !contact::valid_email(&contact.email) {
      return Err(Error::Validation(malformed_email()));
    }

    if self
      .store
      .match_phrase(PhraseField::Phone, &contact.phone)
      .await?
      > 0
    {
      return Err(Error::Validation(phone_in_use()));
    }
    if self
      .store
      .match_phrase(PhraseField::Email, &contact.email)
      .await?
      > 0
    {
      return Err(Error::Validation(email_in_use()));
    }

    let fullname = contact.fullname.clone();
    self.store.put(&contact).await?;
    Ok(format!(
      "Contact for {fullname} has been successfully created."
    ))
  }

  /// Retrieve a single contact by `fullname`.
  pub async fn get(&self, fullname: &str) -> Result<Contact, S::Error> {
    self
      .store
      .get(fullname)
      .await?
      .ok_or_else(|| Error::NotFound(unknown_contact(fullname)))
  }

  /// Apply a partial update to an existing contact.
  ///
  /// Empty update fields are left unchanged. A non-empty phone or email must
  /// be well-formed and, when it differs from the stored value, unused by any
  /// other contact. `fullname` itself is immutable.
  pub async fn update(
    &self,
    fullname: &str,
    update: &ContactUpdate,
  ) -> Result<String, S::Error> {
    let current = self
      .store
      .get(fullname)
      .await?
      .ok_or_else(|| Error::NotFound(unknown_contact(fullname)))?;

    if !update.phone.is_empty() {
      if !contact::valid_phone(&update.phone) {
        return Err(Error::Validation(malformed_phone()));
      }
      if update.phone != current.phone
        && self
          .store
          .match_phrase(PhraseField::Phone, &update.phone)
          .await?
          > 0
      {
        return Err(Error::Validation(phone_in_use()));
      }
    }

    if !update.email.is_empty() {
      if !contact::valid_email(&update.email) {
        return Err(Error::Validation(malformed_email()));
      }
      if update.email != current.email
        && self
          .store
          .match_phrase(PhraseField::Email, &update.email)
          .await?
          > 0
      {
        return Err(Error::Validation(email_in_use()));
      }
    }

    let merged = current.merged(update);
    self.store.put(&merged).await?;
    Ok(format!("Contact {fullname} has been successfully updated."))
  }

  /// Delete a contact by `fullname`.
  ///
  /// Absent contacts are a [`NotFound`](Error::NotFound) error; a found
  /// contact yields a [`DeleteOutcome`] reporting what the store acknowledged.
  pub async fn delete(&self, fullname: &str) -> Result<DeleteOutcome, S::Error> {
    let ack = self
      .store
      .delete(fullname)
      .await?
      .ok_or_else(|| Error::NotFound(unknown_contact(fullname)))?;

    Ok(match ack {
      DeleteAck::Deleted => DeleteOutcome::Deleted { fullname: fullname.to_owned() },
      DeleteAck::NotDeleted => {
        DeleteOutcome::NotAcknowledged { fullname: fullname.to_owned() }
      }
    })
  }
}

// ─── Messages ────────────────────────────────────────────────────────────────

fn unknown_contact(fullname: &str) -> String {
  format!(
    "Could not find contact with the name {fullname}. Please check that the \
     name is correct, or enter a different name."
  )
}

fn malformed_phone() -> String {
  "Phone number not properly formatted. Ensure that the entered phone number \
   contains only numbers and is 10 digits long"
    .into()
}

fn malformed_email() -> String {
  "Email address not properly formatted. Ensure the entered email follows the \
   format: example@email.com"
    .into()
}

fn phone_in_use() -> String {
  "Entered phone number is already in use. Please enter a different phone number".into()
}

fn email_in_use() -> String {
  "Entered email address is already in use. Please enter a different email address".into()
}
