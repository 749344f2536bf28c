use crate::server::{
    error::AppError, model::PageParams, service::country::CountryService,
    service::store::StoreService,
};
use test_utils::{builder::TestBuilder, factory};

mod diagnostics;
