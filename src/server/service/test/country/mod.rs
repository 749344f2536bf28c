use crate::{
    model::country::{CountryFieldsDto, GeopointDto},
    server::{
        error::AppError,
        model::{
            country::{CreateCountryParams, UpdateCountryParams},
            PageParams,
        },
        service::country::CountryService,
    },
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
