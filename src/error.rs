use thiserror::Error;

use crate::config::ConfigError;
use crate::solid::interface_segregation::DeviceError;
use crate::solid::single_responsibility::JournalError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("journal error: {0}")]
    Journal(#[from] JournalError),

    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install logger: {0}")]
    Telemetry(#[from] tracing_subscriber::util::TryInitError),
}

pub type Result<T> = std::result::Result<T, Error>;
