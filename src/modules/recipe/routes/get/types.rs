pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::recipe::repository::Recipe;

    pub enum Success {
        Recipe(Recipe),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Recipe(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
            }
        }
    }

    pub enum Error {
        RecipeNotFound,
        FailedToFetchRecipe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Recipe not found" })),
                )
                    .into_response(),
                Self::FailedToFetchRecipe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error retrieving recipe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
