use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.store
        .find_many()
        .await
        .map(response::Success::Recipes)
        .map_err(|_| response::Error::FailedToFetchRecipes)
}
