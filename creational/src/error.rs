use thiserror::Error;

/// The error type for `creational_patterns`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Invalid {kind} type: '{selector}'")]
  InvalidSelector { kind: &'static str, selector: String },

  #[error("Cannot build computer: missing {part}")]
  MissingPart { part: &'static str },

  #[error("Failed to set global tracing subscriber: {0}")]
  LoggingInit(String),
}

/// A specialized `Result` type for `creational_patterns` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
