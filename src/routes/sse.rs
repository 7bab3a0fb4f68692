use std::convert::Infallible;

use axum::{
    Router,
    extract::{Path, State},
    response::sse::Sse,
    routing::get,
};
use futures::Stream;
use tracing::info;
use uuid::Uuid;

use crate::{error::AppError, services::sse_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/rooms/{id}/events",
    tag = "sse",
    params(("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Room snapshot stream", content_type = "text/event-stream", body = String),
        (status = 404, description = "Room not found")
    )
)]
/// Stream full room snapshots, starting with the current document.
pub async fn room_stream(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>>, AppError> {
    let receiver = sse_service::subscribe_room(&state, id).await?;
    info!(room_id = %id, "new room SSE connection");
    Ok(sse_service::room_sse_stream(receiver))
}

#[utoipa::path(
    get,
    path = "/catalog/events",
    tag = "sse",
    responses((status = 200, description = "Chip catalog stream", content_type = "text/event-stream", body = String))
)]
/// Stream the chip catalog, starting with the current set.
pub async fn catalog_stream(
    State(state): State<SharedState>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let receiver = sse_service::subscribe_catalog(&state);
    info!("new catalog SSE connection");
    sse_service::catalog_sse_stream(receiver)
}

/// Configure the SSE endpoints.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new()
        .route("/rooms/{id}/events", get(room_stream))
        .route("/catalog/events", get(catalog_stream))
}
