use super::{service::service, types::request};
use crate::{types::Context, utils::extract::Payload};
use axum::{extract::State, response::IntoResponse};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Payload(payload): Payload<request::Payload>,
) -> impl IntoResponse {
    service(ctx, payload).await
}
