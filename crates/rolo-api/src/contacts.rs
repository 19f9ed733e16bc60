//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | `?skip=&limit=` |
//! | `GET`    | `/contacts/search` | `?first_name=&last_name=&email=` plus paging; exact match |
//! | `GET`    | `/contacts/birthdays` | Birthdays in the next 7 days, plus paging |
//! | `GET`    | `/contacts/{id}` | 404 if not found |
//! | `POST`   | `/contacts` | Body: contact fields; 201 |
//! | `PUT`    | `/contacts/{id}` | Full replace; 404 if not found |
//! | `DELETE` | `/contacts/{id}` | Returns the deleted record; 404 if not found |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use rolo_core::{
  contact::{Contact, ContactFields, ContactId},
  store::{ContactFilter, ContactStore},
};
use serde::Deserialize;

use crate::{ApiState, PageParams, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts[?skip=&limit=]`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = state
    .service
    .list(state.config.page(params))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
  pub skip:       Option<u64>,
  pub limit:      Option<u64>,
  pub first_name: Option<String>,
  pub last_name:  Option<String>,
  pub email:      Option<String>,
}

/// `GET /contacts/search[?first_name=][&last_name=][&email=][&skip=][&limit=]`
pub async fn search<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let page = state.config.page(PageParams { skip: params.skip, limit: params.limit });
  let filter = ContactFilter {
    first_name: params.first_name,
    last_name:  params.last_name,
    email:      params.email,
  };

  let contacts = state
    .service
    .search(page, &filter)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Birthdays ────────────────────────────────────────────────────────────────

/// `GET /contacts/birthdays[?skip=&limit=]`
pub async fn birthdays<S>(
  State(state): State<ApiState<S>>,
  Query(params): Query<PageParams>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = state
    .service
    .birthdays_within_next_week(state.config.page(params))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = state
    .service
    .get_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<ContactFields>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  body.validate()?;
  let contact = state
    .service
    .create(body)
    .await
    .map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}`
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ContactId>,
  Json(body): Json<ContactFields>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  body.validate()?;
  let contact = state
    .service
    .update(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn remove<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ContactId>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = state
    .service
    .delete(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}
