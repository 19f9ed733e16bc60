//! SQL schema for the Rolo SQLite store.
//!
//! Executed once at connection startup. `PRAGMA user_version` records the
//! layout version.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- AUTOINCREMENT keeps ids from being reused after a delete.
CREATE TABLE IF NOT EXISTS contacts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name  TEXT    NOT NULL CHECK (length(first_name) > 0),
    last_name   TEXT    NOT NULL CHECK (length(last_name)  > 0),
    email       TEXT    NOT NULL CHECK (length(email)      > 0),
    phone       TEXT    NOT NULL CHECK (length(phone)      > 0),
    birthday    TEXT    NOT NULL,  -- ISO 8601 date, YYYY-MM-DD
    birth_md    INTEGER NOT NULL,  -- month * 100 + day of birthday
    note        TEXT
);

CREATE INDEX IF NOT EXISTS contacts_first_name_idx ON contacts(first_name);
CREATE INDEX IF NOT EXISTS contacts_last_name_idx  ON contacts(last_name);
CREATE INDEX IF NOT EXISTS contacts_email_idx      ON contacts(email);
CREATE INDEX IF NOT EXISTS contacts_birth_md_idx   ON contacts(birth_md);

PRAGMA user_version = 1;
";
