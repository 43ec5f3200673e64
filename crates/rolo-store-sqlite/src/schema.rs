//! SQL schema for the Rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per contact; fullname doubles as the document id.
CREATE TABLE IF NOT EXISTS contacts (
    fullname  TEXT PRIMARY KEY,
    firstname TEXT NOT NULL DEFAULT '',
    lastname  TEXT NOT NULL DEFAULT '',
    phone     TEXT NOT NULL,
    email     TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS contacts_phone_idx ON contacts(phone);
CREATE INDEX IF NOT EXISTS contacts_email_idx ON contacts(email);

PRAGMA user_version = 1;
";
