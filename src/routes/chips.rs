use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::post,
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        chip::{AssignChipRequest, TransferChipRequest},
        identity::require_device_id,
        room::RoomSnapshot,
    },
    error::AppError,
    services::chip_service,
    state::SharedState,
};

/// Routes moving chips between the bag and player hands.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/rooms/{id}/chips/assign", post(assign_chip))
        .route("/rooms/{id}/chips/transfer", post(transfer_chip))
}

/// Hand a chip to a player, or bag it by leaving `owner` out. Host only.
#[utoipa::path(
    post,
    path = "/rooms/{id}/chips/assign",
    tag = "chips",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    request_body = AssignChipRequest,
    responses(
        (status = 200, description = "Chip assignment applied", body = RoomSnapshot),
        (status = 400, description = "Unknown chip or owner not on the roster"),
        (status = 403, description = "Caller is not the host")
    )
)]
pub async fn assign_chip(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<AssignChipRequest>>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    let snapshot = chip_service::assign_chip(&state, &device_id, id, payload).await?;
    Ok(Json(snapshot))
}

/// Pass a chip the caller holds to another player on the roster.
#[utoipa::path(
    post,
    path = "/rooms/{id}/chips/transfer",
    tag = "chips",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    request_body = TransferChipRequest,
    responses(
        (status = 200, description = "Chip transferred", body = RoomSnapshot),
        (status = 403, description = "Caller does not hold the chip")
    )
)]
pub async fn transfer_chip(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<TransferChipRequest>>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    let snapshot = chip_service::transfer_chip(&state, &device_id, id, payload).await?;
    Ok(Json(snapshot))
}
