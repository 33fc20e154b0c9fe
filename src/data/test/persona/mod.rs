use crate::{
    data::persona::PersonaRepository,
    model::persona::{CreatePersonaParam, UpdatePersonaParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::persona::PersonaFactory};

mod count_by_owner;
mod create;
mod find_by_name;
mod get_by_owner;
mod update;
