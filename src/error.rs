//! Typed failures for service resolution.

use thiserror::Error;

/// The error type for [`Registry::locate`](crate::Registry::locate).
///
/// Both variants represent wiring bugs rather than recoverable runtime
/// conditions: resolution either asked for a service nobody registered, or a
/// registered factory produced a value of the wrong type. Callers that want
/// fail-fast behavior use the [`locate!`](crate::locate) macro, which panics
/// with the error's message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
  /// No registration entry exists for the requested type.
  #[error("no service registered for type `{type_name}`")]
  UnregisteredService {
    /// Name of the requested type.
    type_name: &'static str,
  },

  /// The registered factory's product cannot be viewed as the requested type.
  #[error("service for type `{type_name}` produced a value of an incompatible type")]
  TypeMismatch {
    /// Name of the requested type.
    type_name: &'static str,
  },
}

impl LocateError {
  /// The name of the type whose resolution failed.
  pub fn type_name(&self) -> &'static str {
    match self {
      LocateError::UnregisteredService { type_name } => type_name,
      LocateError::TypeMismatch { type_name } => type_name,
    }
  }
}

/// A specialized `Result` type for resolution operations.
pub type Result<T, E = LocateError> = std::result::Result<T, E>;
