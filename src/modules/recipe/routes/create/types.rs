pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        #[serde(alias = "recipeTitle")]
        pub title: Option<String>,
        pub ingredients: Option<String>,
        pub instructions: Option<String>,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RecipeCreated(i64),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeCreated(id) => (
                    StatusCode::OK,
                    Json(json!({
                        "status": 200,
                        "message": "Recipe added successfully",
                        "id": id
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToCreateRecipe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToCreateRecipe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Error adding new recipe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
