use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Request body accepted either as JSON or as an urlencoded form. Any failure
/// to read it is a 400 with a `{message}` body.
pub struct Payload<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let result = if is_form(&req) {
            Form::<T>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|err| err.body_text())
        } else {
            Json::<T>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|err| err.body_text())
        };

        result.map(Payload).map_err(|reason| {
            tracing::warn!("Rejected request body: {}", reason);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid request body" })),
            )
                .into_response()
        })
    }
}
