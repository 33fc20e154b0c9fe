pub use super::member_stat::Entity as MemberStat;
pub use super::message_stat::Entity as MessageStat;
pub use super::persona::Entity as Persona;
