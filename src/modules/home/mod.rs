use crate::types::Context;
use axum::routing::{get, Router};
use std::sync::Arc;

async fn handler() -> &'static str {
    "Recipe Book API"
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/", get(handler))
}
