use crate::server::{
    data::document::DocumentRepository,
    model::document::{Filter, FilterOp},
};
use sea_orm::DbErr;
use serde_json::{json, Map, Value};
use test_utils::{builder::TestBuilder, factory, fixture};

mod create;
mod create_with_id;
mod find_all;
mod find_one;
mod remove;
mod update;
