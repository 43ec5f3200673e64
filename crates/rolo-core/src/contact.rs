//! The contact record and its pure data rules.
//!
//! Everything here is I/O-free: serialization shape, phone/email format
//! validation, and the merge computed by a partial update. Callers are
//! expected to validate *before* persisting; neither [`Contact`] nor
//! [`Contact::merged`] performs any checking of its own.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full-string email pattern: word characters with single `.`/`-` separators
/// in the local part and domain, then one or more 2–3 character TLD segments.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$")
    .expect("email regex is valid")
});

// ─── Record ──────────────────────────────────────────────────────────────────

/// A single address-book entry.
///
/// `fullname` doubles as the document id in the store and is immutable after
/// creation. Field declaration order is the canonical document field order;
/// serde preserves it, so serialized documents always read
/// `{fullname, firstname, lastname, phone, email}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub fullname:  String,
  pub firstname: String,
  pub lastname:  String,
  pub phone:     String,
  pub email:     String,
}

/// The mutable subset of a contact, as supplied to the update operation.
///
/// An empty string means "leave this field unchanged"; the HTTP layer
/// defaults omitted query parameters to `""`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactUpdate {
  #[serde(default)]
  pub firstname: String,
  #[serde(default)]
  pub lastname:  String,
  #[serde(default)]
  pub phone:     String,
  #[serde(default)]
  pub email:     String,
}

impl Contact {
  /// Compute the record produced by applying `update` to `self`.
  ///
  /// Each mutable field is overwritten only when the update value is
  /// non-empty; `fullname` is never touched.
  pub fn merged(&self, update: &ContactUpdate) -> Contact {
    fn pick(current: &str, updated: &str) -> String {
      if updated.is_empty() { current } else { updated }.to_owned()
    }

    Contact {
      fullname:  self.fullname.clone(),
      firstname: pick(&self.firstname, &update.firstname),
      lastname:  pick(&self.lastname, &update.lastname),
      phone:     pick(&self.phone, &update.phone),
      email:     pick(&self.email, &update.email),
    }
  }
}

// ─── Validators ──────────────────────────────────────────────────────────────

/// True iff `phone` is exactly 10 ASCII decimal digits.
///
/// No `+`, spaces, or punctuation; non-ASCII digits are rejected too.
pub fn valid_phone(phone: &str) -> bool {
  phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// True iff the *entire* string matches the email pattern.
pub fn valid_email(email: &str) -> bool {
  EMAIL_RE.is_match(email)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn john() -> Contact {
    Contact {
      fullname:  "John Doe".into(),
      firstname: "John".into(),
      lastname:  "Doe".into(),
      phone:     "3015558899".into(),
      email:     "JohnDoe@gmail.com".into(),
    }
  }

  #[test]
  fn phone_ten_digits_ok() {
    assert!(valid_phone("2408765687"));
  }

  #[test]
  fn phone_wrong_length_rejected() {
    assert!(!valid_phone("2408765"));
    assert!(!valid_phone("24087656872345"));
    assert!(!valid_phone(""));
  }

  #[test]
  fn phone_non_digits_rejected() {
    assert!(!valid_phone("1245t8r3h2"));
    assert!(!valid_phone("+2408765687"));
    assert!(!valid_phone("240 876 56"));
  }

  #[test]
  fn phone_non_ascii_digits_rejected() {
    // Arabic-Indic digits; same count of characters, not ASCII.
    assert!(!valid_phone("٢٤٠٨٧٦٥٦٨٧"));
  }

  #[test]
  fn email_valid_forms_accepted() {
    assert!(valid_email("example@example.com"));
    assert!(valid_email("temp.email@gmail.org"));
  }

  #[test]
  fn email_invalid_forms_rejected() {
    assert!(!valid_email("bademail.com"));
    assert!(!valid_email("alsobad@email"));
    assert!(!valid_email(""));
  }

  #[test]
  fn email_trailing_garbage_rejected() {
    // The pattern is anchored; a valid prefix is not enough.
    assert!(!valid_email("example@example.com garbage"));
    assert!(!valid_email("example@example.com,"));
  }

  #[test]
  fn serialize_stable_field_order() {
    let json = serde_json::to_string(&john()).unwrap();
    assert_eq!(
      json,
      r#"{"fullname":"John Doe","firstname":"John","lastname":"Doe","phone":"3015558899","email":"JohnDoe@gmail.com"}"#
    );
  }

  #[test]
  fn merged_overwrites_only_non_empty_fields() {
    let update = ContactUpdate {
      firstname: "Johnathon".into(),
      lastname:  String::new(),
      phone:     "5557569967".into(),
      email:     "JDoe@gmail.com".into(),
    };

    let merged = john().merged(&update);
    assert_eq!(merged.fullname, "John Doe");
    assert_eq!(merged.firstname, "Johnathon");
    assert_eq!(merged.lastname, "Doe");
    assert_eq!(merged.phone, "5557569967");
    assert_eq!(merged.email, "JDoe@gmail.com");
  }

  #[test]
  fn merged_with_all_empty_is_identity() {
    let merged = john().merged(&ContactUpdate::default());
    assert_eq!(merged, john());
  }
}
