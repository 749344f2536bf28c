use crate::server::{
    error::{collection::CollectionError, AppError},
    model::{
        topic::{CreateTopicParams, ElementDraft, ElementPatch, NewElementParams, UpdateTopicParams},
        PageParams, ReorderParams,
    },
    service::topic::TopicService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod elements;
mod reorder_elements;
mod update;

fn new_element(text: &str) -> NewElementParams {
    NewElementParams {
        text: text.to_string(),
        pic: String::new(),
    }
}
