//! The `ContactStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! [`crate::service::ContactService`] and the HTTP layer depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use serde::Deserialize;

use crate::contact::{Contact, ContactFields, ContactId};

// ─── Query types ─────────────────────────────────────────────────────────────

/// Offset pagination. Results are always ordered by id, so consecutive pages
/// never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Page {
  pub skip:  u64,
  pub limit: u64,
}

impl Page {
  pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

  /// The page immediately after this one.
  pub fn next(self) -> Self {
    Self { skip: self.skip.saturating_add(self.limit), limit: self.limit }
  }
}

/// Exact-match filters for [`ContactStore::search`].
///
/// Each field is independent: `None` leaves that column unconstrained, `Some`
/// requires a case-sensitive exact match. Present filters are ANDed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ContactFilter {
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
}

impl ContactFilter {
  pub fn is_empty(&self) -> bool {
    self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
  }

  /// In-memory evaluation of the filter; backends must agree with this.
  pub fn matches(&self, contact: &Contact) -> bool {
    fn field_ok(filter: &Option<String>, value: &str) -> bool {
      filter.as_deref().is_none_or(|f| f == value)
    }

    field_ok(&self.first_name, &contact.first_name)
      && field_ok(&self.last_name, &contact.last_name)
      && field_ok(&self.email, &contact.email)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a Rolo contact store backend.
///
/// "Not found" is always `Ok(None)`; `Err` is reserved for infrastructure
/// failures (unreachable store, constraint violation, transaction conflict).
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Up to `page.limit` contacts after skipping `page.skip`, in id order.
  fn list(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_by_id(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact and return it with its assigned id.
  fn create(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Replace every mutable field of an existing contact.
  ///
  /// Returns `None` when `id` does not exist; this never creates a record.
  fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove a contact permanently, returning it as it was before deletion.
  fn delete(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Contacts matching every present filter in `filter`, paginated like
  /// [`ContactStore::list`].
  fn search<'a>(
    &'a self,
    page: Page,
    filter: &'a ContactFilter,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + 'a;

  /// Contacts whose birthday (month and day) falls within
  /// [`crate::birthday::BirthdayWindow::starting`] today.
  fn birthdays_within_next_week(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Cheap round-trip proving the backend is reachable.
  fn ping(&self) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn contact(first: &str, last: &str, email: &str) -> Contact {
    Contact {
      id:         1,
      first_name: first.into(),
      last_name:  last.into(),
      email:      email.into(),
      phone:      "+380501234567".into(),
      birthday:   NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
      note:       None,
    }
  }

  #[test]
  fn empty_filter_matches_everything() {
    let f = ContactFilter::default();
    assert!(f.is_empty());
    assert!(f.matches(&contact("Jan", "Nowak", "a@x.com")));
  }

  #[test]
  fn single_filter_constrains_only_its_field() {
    let f = ContactFilter { email: Some("a@x.com".into()), ..Default::default() };
    assert!(f.matches(&contact("Jan", "Nowak", "a@x.com")));
    assert!(f.matches(&contact("Ola", "Kowalska", "a@x.com")));
    assert!(!f.matches(&contact("Jan", "Nowak", "b@x.com")));
  }

  #[test]
  fn filters_combine_with_and() {
    let f = ContactFilter {
      first_name: Some("Jan".into()),
      email:      Some("a@x.com".into()),
      ..Default::default()
    };
    assert!(f.matches(&contact("Jan", "Nowak", "a@x.com")));
    assert!(!f.matches(&contact("Jan", "Nowak", "b@x.com")));
    assert!(!f.matches(&contact("Ola", "Nowak", "a@x.com")));
  }

  #[test]
  fn match_is_exact_and_case_sensitive() {
    let f = ContactFilter { first_name: Some("jan".into()), ..Default::default() };
    assert!(!f.matches(&contact("Jan", "Nowak", "a@x.com")));
    assert!(!f.matches(&contact("Janek", "Nowak", "a@x.com")));
  }

  #[test]
  fn next_page_follows_on() {
    assert_eq!(Page::new(0, 10).next(), Page::new(10, 10));
    assert_eq!(Page::new(u64::MAX, 10).next().skip, u64::MAX);
  }
}
