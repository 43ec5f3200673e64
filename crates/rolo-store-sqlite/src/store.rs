//! [`SqliteStore`] — the SQLite implementation of [`DocumentStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rolo_core::{
  contact::Contact,
  store::{DeleteAck, DocumentStore, Hit, Page, PhraseField, SearchResults},
};

use crate::{Error, Result, schema::SCHEMA};

/// Map a [`rusqlite`] row holding the five contact columns to a [`Contact`].
fn row_to_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
  Ok(Contact {
    fullname:  row.get(0)?,
    firstname: row.get(1)?,
    lastname:  row.get(2)?,
    phone:     row.get(3)?,
    email:     row.get(4)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address-book document store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DocumentStore impl ──────────────────────────────────────────────────────

impl DocumentStore for SqliteStore {
  type Error = Error;

  async fn get(&self, fullname: &str) -> Result<Option<Contact>> {
    let fullname = fullname.to_owned();

    let contact = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT fullname, firstname, lastname, phone, email
               FROM contacts WHERE fullname = ?1",
              rusqlite::params![fullname],
              row_to_contact,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(contact)
  }

  async fn put(&self, contact: &Contact) -> Result<()> {
    let contact = contact.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT OR REPLACE INTO contacts (fullname, firstname, lastname, phone, email)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            contact.fullname,
            contact.firstname,
            contact.lastname,
            contact.phone,
            contact.email,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(())
  }

  async fn delete(&self, fullname: &str) -> Result<Option<DeleteAck>> {
    let fullname = fullname.to_owned();

    let ack = self
      .conn
      .call(move |conn| {
        let exists: bool = conn
          .query_row(
            "SELECT 1 FROM contacts WHERE fullname = ?1",
            rusqlite::params![fullname],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);

        if !exists {
          return Ok(None);
        }

        let affected = conn.execute(
          "DELETE FROM contacts WHERE fullname = ?1",
          rusqlite::params![fullname],
        )?;

        Ok(Some(if affected > 0 {
          DeleteAck::Deleted
        } else {
          DeleteAck::NotDeleted
        }))
      })
      .await?;

    Ok(ack)
  }

  async fn match_phrase(&self, field: PhraseField, value: &str) -> Result<u64> {
    // Fixed SQL per field; column names never come from input.
    let sql = match field {
      PhraseField::Fullname => "SELECT COUNT(*) FROM contacts WHERE fullname = ?1",
      PhraseField::Phone => "SELECT COUNT(*) FROM contacts WHERE phone = ?1",
      PhraseField::Email => "SELECT COUNT(*) FROM contacts WHERE email = ?1",
    };
    let value = value.to_owned();

    let count: u64 = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(sql, rusqlite::params![value], |row| row.get(0))?)
      })
      .await?;

    Ok(count)
  }

  async fn search(&self, query: &str, page: Page) -> Result<SearchResults> {
    // `*` is the match-all query; anything else becomes a LIKE filter over
    // every column. No ranking — hits carry no score.
    let pattern = (query != "*").then(|| format!("%{query}%"));
    let limit = page.size as i64;
    let offset = page.from as i64;

    // A NULL pattern disables the filter, so both statements keep a fixed
    // placeholder count in either mode.
    const WHERE_CLAUSE: &str = "WHERE ?1 IS NULL
        OR fullname LIKE ?1 OR firstname LIKE ?1 OR lastname LIKE ?1
        OR phone LIKE ?1 OR email LIKE ?1";

    let (total, contacts): (u64, Vec<Contact>) = self
      .conn
      .call(move |conn| {
        let count_sql = format!("SELECT COUNT(*) FROM contacts {WHERE_CLAUSE}");
        let select_sql = format!(
          "SELECT fullname, firstname, lastname, phone, email
           FROM contacts {WHERE_CLAUSE}
           ORDER BY fullname
           LIMIT ?2 OFFSET ?3"
        );

        let total: u64 = conn.query_row(
          &count_sql,
          rusqlite::params![pattern.as_deref()],
          |row| row.get(0),
        )?;

        let mut stmt = conn.prepare(&select_sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![pattern.as_deref(), limit, offset],
            row_to_contact,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((total, rows))
      })
      .await?;

    let hits = contacts
      .into_iter()
      .map(|contact| Hit {
        id: contact.fullname.clone(),
        score: None,
        contact,
      })
      .collect();

    Ok(SearchResults { total, hits })
  }
}
