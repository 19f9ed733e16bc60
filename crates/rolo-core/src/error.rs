//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A contact field failed a length or format rule.
  #[error("{field}: {reason}")]
  Validation {
    field:  &'static str,
    reason: String,
  },
}

impl Error {
  pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
    Self::Validation { field, reason: reason.into() }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
