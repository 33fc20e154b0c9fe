//! SeaORM entity definitions for the Scriptorium database schema.
//!
//! The schema itself is owned by the `migration` crate; these entities mirror it so
//! repositories can build typed queries. Discord snowflakes are stored as strings.

pub mod prelude;

pub mod member_stat;
pub mod message_stat;
pub mod persona;
