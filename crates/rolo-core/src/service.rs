//! [`ContactService`], the application façade over a [`ContactStore`].
//!
//! Callers (the HTTP layer) talk to the service instead of the store so they
//! never deal with how the store handle was opened or shared. Every method
//! forwards to the store unchanged.

use std::sync::Arc;

use tracing::debug;

use crate::{
  contact::{Contact, ContactFields, ContactId},
  store::{ContactFilter, ContactStore, Page},
};

/// Cloning is cheap; the store handle is reference-counted.
#[derive(Debug)]
pub struct ContactService<S> {
  store: Arc<S>,
}

impl<S> Clone for ContactService<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: ContactStore> ContactService<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub fn store(&self) -> &S { &self.store }

  pub async fn list(&self, page: Page) -> Result<Vec<Contact>, S::Error> {
    debug!(?page, "list contacts");
    self.store.list(page).await
  }

  pub async fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>, S::Error> {
    debug!(id, "get contact");
    self.store.get_by_id(id).await
  }

  pub async fn create(&self, fields: ContactFields) -> Result<Contact, S::Error> {
    debug!("create contact");
    self.store.create(fields).await
  }

  pub async fn update(
    &self,
    id: ContactId,
    fields: ContactFields,
  ) -> Result<Option<Contact>, S::Error> {
    debug!(id, "update contact");
    self.store.update(id, fields).await
  }

  pub async fn delete(&self, id: ContactId) -> Result<Option<Contact>, S::Error> {
    debug!(id, "delete contact");
    self.store.delete(id).await
  }

  pub async fn search(
    &self,
    page: Page,
    filter: &ContactFilter,
  ) -> Result<Vec<Contact>, S::Error> {
    debug!(?page, ?filter, "search contacts");
    self.store.search(page, filter).await
  }

  pub async fn birthdays_within_next_week(
    &self,
    page: Page,
  ) -> Result<Vec<Contact>, S::Error> {
    debug!(?page, "upcoming birthdays");
    self.store.birthdays_within_next_week(page).await
  }

  pub async fn ping(&self) -> Result<(), S::Error> { self.store.ping().await }
}
