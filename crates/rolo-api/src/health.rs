//! Handler for `GET /healthchecker`.

use axum::{Json, extract::State};
use rolo_core::store::ContactStore;
use serde_json::{Value, json};

use crate::{ApiState, error::ApiError};

/// 200 when the store answers a trivial query, 500 otherwise.
pub async fn handler<S>(State(state): State<ApiState<S>>) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  state.service.ping().await.map_err(ApiError::store)?;
  Ok(Json(json!({ "message": "Rolo is up and the store is reachable" })))
}
