//! Encoding and decoding helpers between Rust domain types and the plain
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` text. The derived `birth_md` column holds
//! the month/day composite of the birthday and is always written from the same
//! date it describes.

use chrono::NaiveDate;
use rolo_core::{
  birthday::MonthDay,
  contact::{Contact, ContactFields, ContactId},
  store::Page,
};

use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn encode_month_day(md: MonthDay) -> i64 { i64::from(md.composite()) }

// ─── Page ────────────────────────────────────────────────────────────────────

/// `(limit, offset)` as SQLite integers. Values past `i64::MAX` saturate,
/// which SQLite treats as "no bound" in practice.
pub fn encode_page(page: Page) -> (i64, i64) {
  let clamp = |v: u64| i64::try_from(v).unwrap_or(i64::MAX);
  (clamp(page.limit), clamp(page.skip))
}

// ─── Write-side row ──────────────────────────────────────────────────────────

/// Owned column values for an INSERT or UPDATE, ready to move into a
/// connection closure.
pub struct EncodedFields {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   String,
  pub birth_md:   i64,
  pub note:       Option<String>,
}

impl From<ContactFields> for EncodedFields {
  fn from(f: ContactFields) -> Self {
    Self {
      birthday:   encode_date(f.birthday),
      birth_md:   encode_month_day(MonthDay::of(f.birthday)),
      first_name: f.first_name,
      last_name:  f.last_name,
      email:      f.email,
      phone:      f.phone,
      note:       f.note,
    }
  }
}

// ─── Read-side row ───────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
///
/// Queries must select `id, first_name, last_name, email, phone, birthday,
/// note` in that order.
pub struct RawContact {
  pub id:         ContactId,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   String,
  pub note:       Option<String>,
}

impl RawContact {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      first_name: row.get(1)?,
      last_name:  row.get(2)?,
      email:      row.get(3)?,
      phone:      row.get(4)?,
      birthday:   row.get(5)?,
      note:       row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    if self.id <= 0 {
      return Err(Error::InvalidColumn { column: "id", value: self.id.to_string() });
    }
    Ok(Contact {
      id:         self.id,
      first_name: self.first_name,
      last_name:  self.last_name,
      email:      self.email,
      phone:      self.phone,
      birthday:   decode_date(&self.birthday)?,
      note:       self.note,
    })
  }
}
