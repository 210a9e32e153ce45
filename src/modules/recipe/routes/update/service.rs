use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Rejected update of recipe {}: {}", payload.id, errors);
        response::Error::InvalidPayload(errors)
    })?;

    let affected = ctx
        .store
        .update_by_id(
            payload.id,
            repository::UpdateRecipePayload {
                // present and non-empty after validation
                title: payload.body.title.unwrap_or_default(),
                ingredients: payload.body.ingredients,
                instructions: payload.body.instructions,
            },
        )
        .await
        .map_err(|_| response::Error::FailedToUpdateRecipe)?;

    if affected == 0 {
        tracing::warn!("Recipe {} not found for update", payload.id);
        return Err(response::Error::RecipeNotFound);
    }

    Ok(response::Success::RecipeUpdated)
}
