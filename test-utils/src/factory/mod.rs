//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let persona = factory::persona::create_persona(&db).await?;
//!
//! // Using builder pattern for customization
//! let persona = factory::persona::PersonaFactory::new(&db)
//!     .user_id("123456789")
//!     .name("Alice")
//!     .prefix("a:")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `persona` - Create persona entities
//! - `message_stat` - Create message statistic entities
//! - `helpers` - Shared ID generation

pub mod helpers;
pub mod message_stat;
pub mod persona;

pub use message_stat::create_message_stat;
pub use persona::create_persona;
