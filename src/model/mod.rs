//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so the
//! service layer works with parsed Discord IDs rather than stored strings.

pub mod member_stat;
pub mod message_stat;
pub mod persona;
pub mod proxy;
