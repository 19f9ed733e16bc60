//! `ContactService` forwards every operation to the store unchanged.

use std::sync::Arc;

use chrono::NaiveDate;
use rolo_core::{
  birthday::FixedClock,
  contact::ContactFields,
  service::ContactService,
  store::{ContactFilter, ContactStore, Page},
};
use rolo_store_sqlite::SqliteStore;

async fn service_at(today: NaiveDate) -> ContactService<SqliteStore> {
  let store = SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
    .with_clock(FixedClock(today));
  ContactService::new(Arc::new(store))
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fields(first: &str, email: &str, birthday: NaiveDate) -> ContactFields {
  ContactFields {
    first_name: first.into(),
    last_name:  "Kosach".into(),
    email:      email.into(),
    phone:      "+380671112233".into(),
    birthday,
    note:       Some("met at the library".into()),
  }
}

const ALL: Page = Page { skip: 0, limit: 100 };

#[tokio::test]
async fn crud_through_service_matches_store() {
  let svc = service_at(ymd(2024, 6, 1)).await;

  let created = svc.create(fields("Lesya", "lesya@example.com", ymd(1871, 2, 25))).await.unwrap();
  assert_eq!(svc.get_by_id(created.id).await.unwrap(), Some(created.clone()));
  assert_eq!(svc.store().get_by_id(created.id).await.unwrap(), Some(created.clone()));
  assert_eq!(svc.list(ALL).await.unwrap(), vec![created.clone()]);

  let replacement = fields("Larysa", "larysa@example.com", ymd(1871, 2, 25));
  let updated = svc.update(created.id, replacement.clone()).await.unwrap().unwrap();
  assert_eq!(updated.fields(), replacement);

  assert_eq!(svc.delete(created.id).await.unwrap(), Some(updated));
  assert_eq!(svc.get_by_id(created.id).await.unwrap(), None);
  assert_eq!(svc.update(created.id, replacement).await.unwrap(), None);
  assert_eq!(svc.delete(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn search_and_birthdays_through_service() {
  let svc = service_at(ymd(2024, 12, 29)).await;
  let a = svc.create(fields("Jan", "a@x.com", ymd(1990, 1, 2))).await.unwrap();
  let b = svc.create(fields("Jan", "b@x.com", ymd(1990, 8, 1))).await.unwrap();

  let filter = ContactFilter { first_name: Some("Jan".into()), ..Default::default() };
  assert_eq!(svc.search(ALL, &filter).await.unwrap(), vec![a.clone(), b]);

  assert_eq!(svc.birthdays_within_next_week(ALL).await.unwrap(), vec![a]);
  svc.ping().await.unwrap();
}

#[tokio::test]
async fn clones_share_one_store() {
  let svc = service_at(ymd(2024, 6, 1)).await;
  let other = svc.clone();

  let created = svc.create(fields("Lesya", "lesya@example.com", ymd(1871, 2, 25))).await.unwrap();
  assert_eq!(other.get_by_id(created.id).await.unwrap(), Some(created));
}
