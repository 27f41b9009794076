use super::exit_code;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("Invalid value for --only: {0}")]
  InvalidOnly(String),

  #[error("No matching specs: {0}")]
  NoMatchingSpecs(String),

  #[error("Invalid options: {0}")]
  InvalidOptions(String),

  #[error("Failed to discover specs: {0}")]
  DiscoveryError(String),

  #[error("Failed to create build: {0}")]
  ClientError(String),

  #[error("Failed to serialize {0}")]
  SerializationError(String),

  #[error("Error while running verification: {0}")]
  InternalRuntimeError(String),
}

impl Error {
  pub fn invalid_only<T: ToString>(message: T) -> Self {
    Self::InvalidOnly(message.to_string())
  }

  pub fn no_matching_specs<T: ToString>(message: T) -> Self {
    Self::NoMatchingSpecs(message.to_string())
  }

  pub fn invalid_options<T: ToString>(message: T) -> Self {
    Self::InvalidOptions(message.to_string())
  }

  pub fn discovery_error<T: ToString>(message: T) -> Self {
    Self::DiscoveryError(message.to_string())
  }

  pub fn client_error<T: ToString>(message: T) -> Self {
    Self::ClientError(message.to_string())
  }

  pub fn serialization_error<T: ToString>(message: T) -> Self {
    Self::SerializationError(message.to_string())
  }

  pub fn internal_runtime_error<T: ToString>(message: T) -> Self {
    Self::InternalRuntimeError(message.to_string())
  }

  /// Exit code a CLI should terminate with when this error ends the run.
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::InvalidOnly(_) | Self::InvalidOptions(_) => exit_code::INVALID_OPTIONS,
      Self::NoMatchingSpecs(_) => exit_code::BUILD_NO_STORIES,
      _ => exit_code::UNKNOWN_ERROR,
    }
  }
}

// implement PartialEq for Error so that we can compare errors in tests
impl PartialEq for Error {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Self::InvalidOnly(a), Self::InvalidOnly(b)) => a == b,
      (Self::NoMatchingSpecs(a), Self::NoMatchingSpecs(b)) => a == b,
      (Self::InvalidOptions(a), Self::InvalidOptions(b)) => a == b,
      (Self::DiscoveryError(a), Self::DiscoveryError(b)) => a == b,
      (Self::ClientError(a), Self::ClientError(b)) => a == b,
      (Self::SerializationError(a), Self::SerializationError(b)) => a == b,
      (Self::InternalRuntimeError(a), Self::InternalRuntimeError(b)) => a == b,
      _ => false,
    }
  }
}
