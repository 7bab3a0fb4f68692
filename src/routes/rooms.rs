use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        identity::require_device_id,
        room::{
            CreateRoomRequest, JoinRoomRequest, RoomCreatedResponse, RoomJoinedResponse,
            RoomSnapshot,
        },
    },
    error::AppError,
    services::room_service,
    state::SharedState,
};

/// Routes covering the room lifecycle, from creation to the final whistle.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/rooms", post(create_room))
        .route("/rooms/join", post(join_room))
        .route("/rooms/{id}", get(get_room))
        .route("/rooms/{id}/finish", post(finish_room))
}

/// Open a new room with the caller as host.
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller")),
    request_body = CreateRoomRequest,
    responses(
        (status = 200, description = "Room created", body = RoomCreatedResponse),
        (status = 401, description = "Missing device identity")
    )
)]
pub async fn create_room(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Valid(Json(payload)): Valid<Json<CreateRoomRequest>>,
) -> Result<Json<RoomCreatedResponse>, AppError> {
    let device_id = require_device_id(&headers)?;
    let created = room_service::create_room(&state, device_id, payload).await?;
    Ok(Json(created))
}

/// Join an active room by its shareable code.
#[utoipa::path(
    post,
    path = "/rooms/join",
    tag = "rooms",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller")),
    request_body = JoinRoomRequest,
    responses(
        (status = 200, description = "Joined the room", body = RoomJoinedResponse),
        (status = 404, description = "No active room with that code"),
        (status = 409, description = "Round already finished")
    )
)]
pub async fn join_room(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Valid(Json(payload)): Valid<Json<JoinRoomRequest>>,
) -> Result<Json<RoomJoinedResponse>, AppError> {
    let device_id = require_device_id(&headers)?;
    let joined = room_service::join_room(&state, device_id, payload).await?;
    Ok(Json(joined))
}

/// Fetch a one-shot full snapshot of a room document.
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Current room document", body = RoomSnapshot),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomSnapshot>, AppError> {
    Ok(Json(room_service::fetch_room(&state, id).await?))
}

/// End the round, freezing the room for everyone. Host only.
#[utoipa::path(
    post,
    path = "/rooms/{id}/finish",
    tag = "rooms",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Round finished", body = RoomSnapshot),
        (status = 403, description = "Caller is not the host"),
        (status = 409, description = "Round already finished")
    )
)]
pub async fn finish_room(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    Ok(Json(room_service::finish_room(&state, &device_id, id).await?))
}
