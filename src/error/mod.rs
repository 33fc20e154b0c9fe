//! Error types for the bot and its supporting services.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Event
//! handlers are the outermost callers and log every `AppError` they receive, so no
//! error ever escapes into serenity's event loop.

pub mod config;
pub mod persona;
pub mod proxy;

use thiserror::Error;

use crate::error::{config::ConfigError, persona::PersonaError, proxy::ProxyError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so that `?` can be used
/// across repository, service and Discord calls alike.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A persona store operation was rejected.
    #[error(transparent)]
    PersonaErr(#[from] PersonaError),

    /// The message proxy could not complete.
    #[error(transparent)]
    ProxyErr(#[from] ProxyError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, typically binding the health server socket.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
