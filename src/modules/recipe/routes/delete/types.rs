pub mod request {
    pub struct Payload {
        pub id: i64,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RecipeDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeDeleted => (
                    StatusCode::OK,
                    Json(json!({ "message": "Recipe deleted successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RecipeNotFound,
        FailedToDeleteRecipe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Recipe not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteRecipe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error deleting recipe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
