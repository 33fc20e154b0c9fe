//! Database repository layer.
//!
//! Repositories handle database operations for each domain. They use SeaORM entity
//! models internally and return domain models so the service layer never touches
//! stored string IDs.

pub mod member_stat;
pub mod message_stat;
pub mod persona;
