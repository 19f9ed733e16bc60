//! HTTP server wiring for Rolo: configuration and the top-level router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use rolo_api::ApiConfig;
use rolo_core::{service::ContactService, store::ContactStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and `ROLO_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub store_path:    PathBuf,
  pub default_limit: u64,
  pub max_limit:     u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    let api = ApiConfig::default();
    Self {
      host:          "127.0.0.1".to_owned(),
      port:          8000,
      store_path:    PathBuf::from("rolo.sqlite3"),
      default_limit: api.default_limit,
      max_limit:     api.max_limit,
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and overlay `ROLO_*` environment variables.
  pub fn load(path: impl Into<PathBuf>) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path.into()).required(false))
      .add_source(config::Environment::with_prefix("ROLO"))
      .build()?
      .try_deserialize()
  }

  pub fn api_config(&self) -> ApiConfig {
    ApiConfig { default_limit: self.default_limit, max_limit: self.max_limit }
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application: the JSON API under `/api`, with request tracing.
pub fn app<S>(store: S, config: &ServerConfig) -> Router
where
  S: ContactStore + 'static,
{
  let service = ContactService::new(Arc::new(store));
  Router::new()
    .nest("/api", rolo_api::api_router(service, config.api_config()))
    .layer(TraceLayer::new_for_http())
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use std::io::Write as _;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use rolo_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  #[test]
  fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
  }

  #[test]
  fn file_values_override_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "port = 9100\nstore_path = \"/tmp/rolo-test.sqlite3\"\nmax_limit = 50").unwrap();

    let cfg = ServerConfig::load(file.path()).unwrap();
    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.store_path, PathBuf::from("/tmp/rolo-test.sqlite3"));
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.api_config().default_limit, 100);
    assert_eq!(cfg.api_config().max_limit, 50);
    assert_eq!(cfg.address(), "127.0.0.1:9100");
  }

  #[test]
  fn tilde_expands_to_home() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(expand_tilde(Path::new("~/rolo.db")), PathBuf::from(home).join("rolo.db"));
    assert_eq!(expand_tilde(Path::new("/abs/rolo.db")), PathBuf::from("/abs/rolo.db"));
  }

  #[tokio::test]
  async fn api_is_mounted_under_prefix() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let app = app(store, &ServerConfig::default());

    let req = Request::builder().uri("/api/contacts").body(Body::empty()).unwrap();
    let res = app.clone().oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(serde_json::from_slice::<serde_json::Value>(&bytes).unwrap(), serde_json::json!([]));

    let req = Request::builder().uri("/contacts").body(Body::empty()).unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
  }
}
