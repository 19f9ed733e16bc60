//! [`SqliteStore`]: the SQLite implementation of [`ContactStore`].

use std::{path::Path, sync::Arc};

use rusqlite::OptionalExtension as _;
use tracing::debug;

use rolo_core::{
  birthday::{BirthdayWindow, Clock, SystemClock},
  contact::{Contact, ContactFields, ContactId},
  store::{ContactFilter, ContactStore, Page},
};

use crate::{
  Result,
  encode::{EncodedFields, RawContact, encode_month_day, encode_page},
  schema::SCHEMA,
};

// ─── SQL ─────────────────────────────────────────────────────────────────────

const LIST_SQL: &str = "
  SELECT id, first_name, last_name, email, phone, birthday, note
  FROM contacts
  ORDER BY id
  LIMIT ?1 OFFSET ?2";

const GET_SQL: &str = "
  SELECT id, first_name, last_name, email, phone, birthday, note
  FROM contacts
  WHERE id = ?1";

const INSERT_SQL: &str = "
  INSERT INTO contacts (first_name, last_name, email, phone, birthday, birth_md, note)
  VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
  RETURNING id, first_name, last_name, email, phone, birthday, note";

const UPDATE_SQL: &str = "
  UPDATE contacts
  SET first_name = ?1, last_name = ?2, email = ?3, phone = ?4,
      birthday = ?5, birth_md = ?6, note = ?7
  WHERE id = ?8
  RETURNING id, first_name, last_name, email, phone, birthday, note";

const DELETE_SQL: &str = "
  DELETE FROM contacts
  WHERE id = ?1
  RETURNING id, first_name, last_name, email, phone, birthday, note";

// One optional predicate per filter: an unbound (NULL) parameter leaves its
// column unconstrained, a bound one demands an exact match.
const SEARCH_SQL: &str = "
  SELECT id, first_name, last_name, email, phone, birthday, note
  FROM contacts
  WHERE (?1 IS NULL OR first_name = ?1)
    AND (?2 IS NULL OR last_name  = ?2)
    AND (?3 IS NULL OR email      = ?3)
  ORDER BY id
  LIMIT ?4 OFFSET ?5";

const BIRTHDAYS_SQL: &str = "
  SELECT id, first_name, last_name, email, phone, birthday, note
  FROM contacts
  WHERE birth_md BETWEEN ?1 AND ?2
  ORDER BY id
  LIMIT ?3 OFFSET ?4";

// Window crosses the new year: match the December tail or the January head.
const BIRTHDAYS_WRAPPED_SQL: &str = "
  SELECT id, first_name, last_name, email, phone, birthday, note
  FROM contacts
  WHERE birth_md >= ?1 OR birth_md <= ?2
  ORDER BY id
  LIMIT ?3 OFFSET ?4";

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Rolo contact store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:  tokio_rusqlite::Connection,
  clock: Arc<dyn Clock>,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    Self::init(conn).await
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    Self::init(conn).await
  }

  /// Replace the source of "today" used by the birthday query.
  pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
    self.clock = Arc::new(clock);
    self
  }

  async fn init(conn: tokio_rusqlite::Connection) -> Result<Self> {
    conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(Self { conn, clock: Arc::new(SystemClock) })
  }

  /// Run `f` inside one transaction. Commits on success; an early return or
  /// error drops the transaction, which rolls it back.
  async fn transact<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&rusqlite::Transaction<'_>) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
  {
    let out = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let out = f(&tx)?;
        tx.commit()?;
        Ok(out)
      })
      .await?;
    Ok(out)
  }

  async fn birthdays_in(&self, window: BirthdayWindow, page: Page) -> Result<Vec<Contact>> {
    let sql = if window.wraps() { BIRTHDAYS_WRAPPED_SQL } else { BIRTHDAYS_SQL };
    let start = encode_month_day(window.start);
    let end = encode_month_day(window.end);
    let (limit, offset) = encode_page(page);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
          .query_map(rusqlite::params![start, end, limit, offset], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }
}

fn decode_optional(raw: Option<RawContact>) -> Result<Option<Contact>> {
  raw.map(RawContact::into_contact).transpose()
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = crate::Error;

  async fn list(&self, page: Page) -> Result<Vec<Contact>> {
    let (limit, offset) = encode_page(page);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(LIST_SQL)?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(GET_SQL, rusqlite::params![id], RawContact::from_row)
            .optional()?,
        )
      })
      .await?;

    decode_optional(raw)
  }

  async fn create(&self, fields: ContactFields) -> Result<Contact> {
    let f = EncodedFields::from(fields);

    let raw = self
      .transact(move |tx| {
        tx.query_row(
          INSERT_SQL,
          rusqlite::params![
            f.first_name,
            f.last_name,
            f.email,
            f.phone,
            f.birthday,
            f.birth_md,
            f.note,
          ],
          RawContact::from_row,
        )
      })
      .await?;

    let contact = raw.into_contact()?;
    debug!(id = contact.id, "contact created");
    Ok(contact)
  }

  async fn update(&self, id: ContactId, fields: ContactFields) -> Result<Option<Contact>> {
    let f = EncodedFields::from(fields);

    let raw = self
      .transact(move |tx| {
        tx.query_row(
          UPDATE_SQL,
          rusqlite::params![
            f.first_name,
            f.last_name,
            f.email,
            f.phone,
            f.birthday,
            f.birth_md,
            f.note,
            id,
          ],
          RawContact::from_row,
        )
        .optional()
      })
      .await?;

    if raw.is_some() {
      debug!(id, "contact updated");
    }
    decode_optional(raw)
  }

  async fn delete(&self, id: ContactId) -> Result<Option<Contact>> {
    let raw = self
      .transact(move |tx| {
        tx.query_row(DELETE_SQL, rusqlite::params![id], RawContact::from_row)
          .optional()
      })
      .await?;

    if raw.is_some() {
      debug!(id, "contact deleted");
    }
    decode_optional(raw)
  }

  async fn search(&self, page: Page, filter: &ContactFilter) -> Result<Vec<Contact>> {
    let first_name = filter.first_name.clone();
    let last_name = filter.last_name.clone();
    let email = filter.email.clone();
    let (limit, offset) = encode_page(page);

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(SEARCH_SQL)?;
        let rows = stmt
          .query_map(
            rusqlite::params![first_name, last_name, email, limit, offset],
            RawContact::from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn birthdays_within_next_week(&self, page: Page) -> Result<Vec<Contact>> {
    let window = BirthdayWindow::starting(self.clock.today());
    debug!(start = %window.start, end = %window.end, wraps = window.wraps(), "birthday window");
    self.birthdays_in(window, page).await
  }

  async fn ping(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
