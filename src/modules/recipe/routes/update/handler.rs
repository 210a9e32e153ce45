use super::{service::service, types::request};
use crate::{types::Context, utils::extract::Payload};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<i64>,
    Payload(body): Payload<request::Body>,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
