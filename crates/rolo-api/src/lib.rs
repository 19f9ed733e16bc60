//! JSON REST API for Rolo.
//!
//! Exposes an axum [`Router`] backed by a [`ContactService`] over any
//! [`ContactStore`]. This is the layer that validates input and turns "not
//! found" into 404; transport and TLS are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolo_api::api_router(service, ApiConfig::default()))
//! ```

pub mod contacts;
pub mod error;
pub mod health;

use axum::{Router, routing::get};
use rolo_core::{
  service::ContactService,
  store::{ContactStore, Page},
};
use serde::Deserialize;

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Paging limits applied at the HTTP boundary.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
  /// `limit` used when a request does not supply one.
  pub default_limit: u64,
  /// Requests asking for more than this are silently capped.
  pub max_limit:     u64,
}

impl Default for ApiConfig {
  fn default() -> Self { Self { default_limit: 100, max_limit: 1000 } }
}

/// `?skip=&limit=` query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
  pub skip:  Option<u64>,
  pub limit: Option<u64>,
}

impl ApiConfig {
  pub fn page(&self, params: PageParams) -> Page {
    Page {
      skip:  params.skip.unwrap_or(0),
      limit: params.limit.unwrap_or(self.default_limit).min(self.max_limit),
    }
  }
}

// ─── State ────────────────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub service: ContactService<S>,
  pub config:  ApiConfig,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { service: self.service.clone(), config: self.config }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: ContactService<S>, config: ApiConfig) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route("/contacts/search", get(contacts::search::<S>))
    .route("/contacts/birthdays", get(contacts::birthdays::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::remove::<S>),
    )
    .route("/healthchecker", get(health::handler::<S>))
    .with_state(ApiState { service, config })
}
