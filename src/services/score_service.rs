use uuid::Uuid;

use crate::{
    dto::{room::RoomSnapshot, score::RecordScoreRequest},
    error::ServiceError,
    services::room_service,
    state::{
        SharedState,
        fields::FieldUpdate,
        status::{HoleStep, step_hole},
    },
};

/// Record one player's strokes-relative-to-par on one hole. Host only.
pub async fn record_score(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
    request: RecordScoreRequest,
) -> Result<RoomSnapshot, ServiceError> {
    let room = room_service::require_room(state, room_id).await?;
    room_service::ensure_host(&room, device_id)?;
    room_service::ensure_active(&room)?;

    if !room.roster_contains(&request.player_id) {
        return Err(ServiceError::InvalidInput(format!(
            "player `{}` is not in this room",
            request.player_id
        )));
    }

    if request.hole > room.total_holes {
        return Err(ServiceError::InvalidInput(format!(
            "hole {} is beyond the {} holes of this round",
            request.hole, room.total_holes
        )));
    }

    room_service::apply_updates(
        state,
        room_id,
        vec![FieldUpdate::HoleScore {
            player_id: request.player_id,
            hole: request.hole,
            strokes: request.strokes,
        }],
    )
    .await
}

/// Move on to the next hole. Host only; the pointer stops at the last hole.
pub async fn advance_hole(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
) -> Result<RoomSnapshot, ServiceError> {
    step(state, device_id, room_id, HoleStep::Forward).await
}

/// Step back to the previous hole to fix an entry. Host only; floors at hole 1.
pub async fn step_back_hole(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
) -> Result<RoomSnapshot, ServiceError> {
    step(state, device_id, room_id, HoleStep::Back).await
}

async fn step(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
    direction: HoleStep,
) -> Result<RoomSnapshot, ServiceError> {
    let room = room_service::require_room(state, room_id).await?;
    room_service::ensure_host(&room, device_id)?;
    room_service::ensure_active(&room)?;

    let next = step_hole(room.current_hole, room.total_holes, direction)
        .map_err(|err| ServiceError::InvalidState(err.to_string()))?;

    room_service::apply_updates(state, room_id, vec![FieldUpdate::CurrentHole(next)]).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::room_store::memory::MemoryRoomStore,
        dto::room::CreateRoomRequest,
        services::room_service::create_room,
        state::AppState,
    };

    async fn state_with_room(total_holes: u16) -> (SharedState, Uuid) {
        let state = AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        );
        let created = create_room(
            &state,
            "host".into(),
            CreateRoomRequest {
                display_name: "Alex".into(),
                total_holes,
            },
        )
        .await
        .unwrap();
        (state, created.room_id)
    }

    #[tokio::test]
    async fn host_records_a_hole_and_moves_on() {
        let (state, room_id) = state_with_room(9).await;

        let snapshot = record_score(
            &state,
            "host",
            room_id,
            RecordScoreRequest {
                player_id: "host".into(),
                hole: 1,
                strokes: -1,
            },
        )
        .await
        .unwrap();
        assert_eq!(snapshot.scores.get("host").unwrap().get(&1), Some(&-1));

        let snapshot = advance_hole(&state, "host", room_id).await.unwrap();
        assert_eq!(snapshot.current_hole, 2);
    }

    #[tokio::test]
    async fn only_the_host_scores() {
        let (state, room_id) = state_with_room(9).await;

        let err = record_score(
            &state,
            "someone-else",
            room_id,
            RecordScoreRequest {
                player_id: "host".into(),
                hole: 1,
                strokes: 0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotHost(_)));
    }

    #[tokio::test]
    async fn scores_only_land_for_roster_players_and_real_holes() {
        let (state, room_id) = state_with_room(9).await;

        let err = record_score(
            &state,
            "host",
            room_id,
            RecordScoreRequest {
                player_id: "stranger".into(),
                hole: 1,
                strokes: 0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let err = record_score(
            &state,
            "host",
            room_id,
            RecordScoreRequest {
                player_id: "host".into(),
                hole: 10,
                strokes: 0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn the_hole_pointer_is_bounded_on_both_ends() {
        let (state, room_id) = state_with_room(2).await;

        let err = step_back_hole(&state, "host", room_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        advance_hole(&state, "host", room_id).await.unwrap();
        let err = advance_hole(&state, "host", room_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        let snapshot = step_back_hole(&state, "host", room_id).await.unwrap();
        assert_eq!(snapshot.current_hole, 1);
    }
}
