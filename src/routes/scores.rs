use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post, put},
};
use axum_valid::Valid;
use uuid::Uuid;

use crate::{
    dto::{
        identity::require_device_id, room::RoomSnapshot, score::RecordScoreRequest,
        standings::StandingsResponse,
    },
    error::AppError,
    services::{score_service, standings_service},
    state::SharedState,
};

/// Scorekeeping endpoints: per-hole strokes, the shared hole pointer, and the
/// final board.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/rooms/{id}/scores", put(record_score))
        .route("/rooms/{id}/hole/advance", post(advance_hole))
        .route("/rooms/{id}/hole/back", post(step_back_hole))
        .route("/rooms/{id}/standings", get(get_standings))
}

#[utoipa::path(
    put,
    path = "/rooms/{id}/scores",
    tag = "scores",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    request_body = RecordScoreRequest,
    responses(
        (status = 200, description = "Score recorded", body = RoomSnapshot),
        (status = 400, description = "Player not on the roster or hole out of range"),
        (status = 403, description = "Caller is not the host")
    )
)]
/// Record strokes relative to par for one player on one hole. Host only;
/// writing the same cell again overwrites it.
pub async fn record_score(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Valid(Json(payload)): Valid<Json<RecordScoreRequest>>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    let snapshot = score_service::record_score(&state, &device_id, id, payload).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/rooms/{id}/hole/advance",
    tag = "scores",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Hole pointer advanced", body = RoomSnapshot),
        (status = 409, description = "Already on the last hole")
    )
)]
/// Move the whole card to the next hole. Host only.
pub async fn advance_hole(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    let snapshot = score_service::advance_hole(&state, &device_id, id).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    post,
    path = "/rooms/{id}/hole/back",
    tag = "scores",
    params(("X-Device-Id" = String, Header, description = "Stable device identifier of the caller"),
    ("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Hole pointer stepped back", body = RoomSnapshot),
        (status = 409, description = "Already on the first hole")
    )
)]
/// Step back to the previous hole to fix an entry. Host only.
pub async fn step_back_hole(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomSnapshot>, AppError> {
    let device_id = require_device_id(&headers)?;
    let snapshot = score_service::step_back_hole(&state, &device_id, id).await?;
    Ok(Json(snapshot))
}

#[utoipa::path(
    get,
    path = "/rooms/{id}/standings",
    tag = "scores",
    params(("id" = Uuid, Path, description = "Identifier of the room")),
    responses(
        (status = 200, description = "Final board", body = StandingsResponse),
        (status = 409, description = "Round still in progress")
    )
)]
/// Return the final board of a finished round, worst total last.
pub async fn get_standings(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StandingsResponse>, AppError> {
    let board = standings_service::standings(&state, id).await?;
    Ok(Json(board))
}
