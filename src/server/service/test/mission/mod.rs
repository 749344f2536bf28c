use crate::server::{
    error::{collection::CollectionError, AppError},
    model::{
        mission::{CityPatch, CreateMissionParams, NewCityParams, UpdateMissionParams},
        ReorderParams,
    },
    service::mission::MissionService,
};
use test_utils::{builder::TestBuilder, factory};

mod cities;
mod create;

fn new_city(order: Option<&str>, place: &str) -> NewCityParams {
    NewCityParams {
        order: order.map(str::to_string),
        place: place.to_string(),
        map: String::new(),
        photo: String::new(),
    }
}
