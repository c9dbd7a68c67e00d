pub mod config;
pub mod logger;
pub mod mambu_client;

pub use config::ConfigError;
pub use logger::LoggerError;
pub use mambu_client::MambuClientError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Client(#[from] mambu_client::MambuClientError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
