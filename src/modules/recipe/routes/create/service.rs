use super::types::{request, response};
use crate::{modules::recipe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    // Title is not checked here; a missing one is rejected by the table's
    // NOT NULL constraint and reported as a server error.
    let id = ctx
        .store
        .create(repository::CreateRecipePayload {
            title: payload.title,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
        })
        .await
        .map_err(|_| response::Error::FailedToCreateRecipe)?;

    tracing::info!("New recipe {} added to the database", id);

    Ok(response::Success::RecipeCreated(id))
}
