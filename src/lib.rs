//! Scriptorium: persona message proxying for Discord.
//!
//! The crate follows a layered layout:
//!
//! - **Bot** (`bot/`) - Serenity client setup and gateway event handlers
//! - **Service** (`service/`) - Business logic: persona management, message proxy, member stats
//! - **Data** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model** (`model/`) - Domain models and operation-specific parameter types
//! - **Error** (`error/`) - Application error types
//!
//! Supporting modules provide configuration (`config`), startup helpers (`startup`),
//! and the health server (`router`, `state`).

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
