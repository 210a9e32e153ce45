pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::recipe::repository::Recipe;

    pub enum Success {
        Recipes(Vec<Recipe>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Recipes(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchRecipes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchRecipes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error retrieving recipes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
