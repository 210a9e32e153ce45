use super::{home, recipe};
use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(home::get_router())
        .merge(recipe::get_router())
}
