use super::handler;
use crate::types::Context;
use axum::routing::{post, put, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/recipes/:id", put(handler::handler))
        .route("/update-recipe/:id", post(handler::handler))
}
