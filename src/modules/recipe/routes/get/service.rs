use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.store
        .find_by_id(payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchRecipe)?
        .ok_or_else(|| {
            tracing::warn!("Recipe {} not found", payload.id);
            response::Error::RecipeNotFound
        })
        .map(response::Success::Recipe)
}
