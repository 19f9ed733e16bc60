//! Contact types: the single entity of the Rolo directory.
//!
//! A contact is stored as one flat record. Updates replace every mutable field
//! at once; there is no partial patch.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned identifier. Monotonic and never reused after deletion.
pub type ContactId = i64;

pub const NAME_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 256;
pub const NOTE_MAX_LEN: usize = 500;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
    .expect("valid email regex")
});

static E164_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{1,14}$").expect("valid E.164 regex"));

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A persisted contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:         ContactId,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  /// E.164 formatted, e.g. `+380501234567`.
  pub phone:      String,
  pub birthday:   NaiveDate,
  pub note:       Option<String>,
}

impl Contact {
  /// Attach a store-assigned id to a set of fields.
  pub fn from_fields(id: ContactId, fields: ContactFields) -> Self {
    Self {
      id,
      first_name: fields.first_name,
      last_name: fields.last_name,
      email: fields.email,
      phone: fields.phone,
      birthday: fields.birthday,
      note: fields.note,
    }
  }

  /// The mutable part of the record, as accepted by create and update.
  pub fn fields(&self) -> ContactFields {
    ContactFields {
      first_name: self.first_name.clone(),
      last_name:  self.last_name.clone(),
      email:      self.email.clone(),
      phone:      self.phone.clone(),
      birthday:   self.birthday,
      note:       self.note.clone(),
    }
  }
}

// ─── ContactFields ───────────────────────────────────────────────────────────

/// Input to [`crate::store::ContactStore::create`] and
/// [`crate::store::ContactStore::update`]. The id is never accepted from
/// callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactFields {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub phone:      String,
  pub birthday:   NaiveDate,
  #[serde(default)]
  pub note:       Option<String>,
}

impl ContactFields {
  /// Check field lengths and formats.
  ///
  /// Called by the boundary layer before anything reaches the store; the
  /// store itself trusts its input.
  pub fn validate(&self) -> Result<()> {
    check_len("first_name", &self.first_name, 1, NAME_MAX_LEN)?;
    check_len("last_name", &self.last_name, 1, NAME_MAX_LEN)?;
    check_len("email", &self.email, 1, EMAIL_MAX_LEN)?;
    if !EMAIL_RE.is_match(&self.email) {
      return Err(Error::validation("email", "not a valid email address"));
    }
    if !E164_RE.is_match(&self.phone) {
      return Err(Error::validation("phone", "not an E.164 phone number"));
    }
    if let Some(note) = &self.note {
      check_len("note", note, 0, NOTE_MAX_LEN)?;
    }
    Ok(())
  }
}

fn check_len(field: &'static str, value: &str, min: usize, max: usize) -> Result<()> {
  let len = value.chars().count();
  if len < min || (min > 0 && value.trim().is_empty()) {
    return Err(Error::validation(field, "must not be empty"));
  }
  if len > max {
    return Err(Error::validation(field, format!("must be at most {max} characters")));
  }
  Ok(())
}
