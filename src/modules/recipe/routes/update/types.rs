pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[serde(alias = "editTitle")]
        #[validate(
            required(code = "TITLE_REQUIRED", message = "Recipe title is required"),
            length(min = 1, code = "TITLE_EMPTY", message = "Recipe title cannot be empty")
        )]
        pub title: Option<String>,
        #[serde(alias = "editIngredients")]
        pub ingredients: Option<String>,
        #[serde(alias = "editInstructions")]
        pub instructions: Option<String>,
    }

    pub struct Payload {
        pub id: i64,
        pub body: Body,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    use crate::utils;

    pub enum Success {
        RecipeUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeUpdated => (
                    StatusCode::OK,
                    Json(json!({ "message": "Recipe updated successfully" })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPayload(ValidationErrors),
        RecipeNotFound,
        FailedToUpdateRecipe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidPayload(errors) => utils::validation::into_response(
                    "Recipe title cannot be null or empty",
                    errors,
                )
                .into_response(),
                Self::RecipeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": "Recipe not found" })),
                )
                    .into_response(),
                Self::FailedToUpdateRecipe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error updating recipe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
