use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match ctx.store.delete_by_id(payload.id).await {
        Ok(0) => {
            tracing::warn!("Recipe {} not found for deletion", payload.id);
            Err(response::Error::RecipeNotFound)
        }
        Ok(_) => Ok(response::Success::RecipeDeleted),
        Err(_) => Err(response::Error::FailedToDeleteRecipe),
    }
}
