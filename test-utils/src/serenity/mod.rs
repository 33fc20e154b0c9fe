//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_webhook;
//!
//! let webhook = create_test_webhook(111, 222, "Scriptorium", Some(333));
//! ```
//!
//! # Available Factories
//!
//! - `webhook::create_test_webhook` - Create Serenity Webhook objects

pub mod webhook;

pub use webhook::create_test_webhook;
