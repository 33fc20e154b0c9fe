//! Member join/leave statistic models.

use std::fmt;

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Kind of membership change recorded for a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberEventKind {
    Join,
    Leave,
}

impl MemberEventKind {
    /// Value stored in the `event_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Leave => "leave",
        }
    }

    /// Parses a stored `event_type` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "join" => Some(Self::Join),
            "leave" => Some(Self::Leave),
            _ => None,
        }
    }
}

impl fmt::Display for MemberEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded member join or leave.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStat {
    pub id: i32,
    pub user_id: u64,
    pub guild_id: u64,
    pub kind: MemberEventKind,
    pub created_at: DateTime<Utc>,
}

impl MemberStat {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::member_stat::Model) -> Result<Self, DbErr> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let kind = MemberEventKind::parse(&entity.event_type).ok_or_else(|| {
            DbErr::Custom(format!("Unknown member event type: {}", entity.event_type))
        })?;

        Ok(Self {
            id: entity.id,
            user_id,
            guild_id,
            kind,
            created_at: entity.created_at,
        })
    }
}
