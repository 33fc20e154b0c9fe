//! Service layer.
//!
//! Services hold the business logic and coordinate between repositories and the
//! Discord API. They never build queries themselves; that belongs to `data`.

pub mod member;
pub mod persona;
pub mod proxy;
