use rand::Rng;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dao::{room_store::UpdateOutcome, storage::StorageError},
    dto::room::{
        CreateRoomRequest, JoinRoomRequest, RoomCreatedResponse, RoomJoinedResponse, RoomSnapshot,
    },
    error::ServiceError,
    state::{
        SharedState,
        fields::FieldUpdate,
        room::{GameRoom, Player, ROOM_CODE_ALPHABET, ROOM_CODE_LENGTH},
        status::StatusEvent,
    },
};

/// How many fresh codes creation draws before treating collisions as a fault.
const ROOM_CODE_ATTEMPTS: u32 = 5;

/// Open a new room with the caller as host and sole roster entry.
pub async fn create_room(
    state: &SharedState,
    device_id: String,
    request: CreateRoomRequest,
) -> Result<RoomCreatedResponse, ServiceError> {
    let host = Player {
        id: device_id,
        name: request.display_name.trim().to_owned(),
    };

    let mut attempts = 0;
    loop {
        attempts += 1;
        let room = GameRoom::new(host.clone(), generate_room_code(), request.total_holes);
        let room_id = room.id;
        let room_code = room.room_code.clone();

        match state.store().insert_room(room).await {
            Ok(()) => {
                info!(%room_id, room_code, "room created");
                return Ok(RoomCreatedResponse { room_id, room_code });
            }
            Err(StorageError::DuplicateRoomCode { code }) if attempts < ROOM_CODE_ATTEMPTS => {
                warn!(room_code = code, "room code collision; drawing a fresh code");
            }
            Err(err) => return Err(ServiceError::Creation(err)),
        }
    }
}

/// Enter an active room by its share code.
///
/// Re-joining from a device already on the roster succeeds without touching
/// the document, which is what makes reconnects painless.
pub async fn join_room(
    state: &SharedState,
    device_id: String,
    request: JoinRoomRequest,
) -> Result<RoomJoinedResponse, ServiceError> {
    let code = request.room_code.trim().to_uppercase();
    let player = Player {
        id: device_id,
        name: request.display_name.trim().to_owned(),
    };

    match state.store().join_by_code(code.clone(), player).await? {
        Some(UpdateOutcome::Applied(room)) => {
            info!(room_id = %room.id, room_code = code, "player joined room");
            Ok(RoomJoinedResponse { room_id: room.id })
        }
        Some(UpdateOutcome::Frozen(_)) => {
            Err(ServiceError::InvalidState("round already finished".into()))
        }
        None => Err(ServiceError::NotFound(format!(
            "no active room with code `{code}`"
        ))),
    }
}

/// One-shot full snapshot of a room, finished rooms included.
pub async fn fetch_room(state: &SharedState, id: Uuid) -> Result<RoomSnapshot, ServiceError> {
    let room = require_room(state, id).await?;
    Ok(room.into())
}

/// End the round. Valid from any hole; only the host may do it.
pub async fn finish_room(
    state: &SharedState,
    device_id: &str,
    id: Uuid,
) -> Result<RoomSnapshot, ServiceError> {
    let room = require_room(state, id).await?;
    ensure_host(&room, device_id)?;

    let next = room
        .status
        .transition(StatusEvent::Finish)
        .map_err(|err| ServiceError::InvalidState(err.to_string()))?;

    apply_updates(state, id, vec![FieldUpdate::Status(next)]).await
}

/// Load a room document or fail with the standard not-found error.
pub(crate) async fn require_room(state: &SharedState, id: Uuid) -> Result<GameRoom, ServiceError> {
    state
        .store()
        .find_room(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("room `{id}` not found")))
}

/// Only the room creator may drive scores, the hole pointer and assignments.
pub(crate) fn ensure_host(room: &GameRoom, device_id: &str) -> Result<(), ServiceError> {
    if !room.is_host(device_id) {
        return Err(ServiceError::NotHost(format!(
            "only the host may do this in room `{}`",
            room.id
        )));
    }
    Ok(())
}

/// Mutations only land while the round is active.
pub(crate) fn ensure_active(room: &GameRoom) -> Result<(), ServiceError> {
    if !room.status.is_active() {
        return Err(ServiceError::InvalidState("round already finished".into()));
    }
    Ok(())
}

/// Push a batch of field updates through the store and hand back the snapshot.
pub(crate) async fn apply_updates(
    state: &SharedState,
    id: Uuid,
    updates: Vec<FieldUpdate>,
) -> Result<RoomSnapshot, ServiceError> {
    let paths = updates.iter().map(FieldUpdate::path).collect::<Vec<_>>();

    match state.store().update_fields(id, updates).await? {
        Some(UpdateOutcome::Applied(room)) => {
            debug!(room_id = %id, ?paths, "field updates applied");
            Ok(room.into())
        }
        Some(UpdateOutcome::Frozen(_)) => {
            Err(ServiceError::InvalidState("round already finished".into()))
        }
        None => Err(ServiceError::NotFound(format!("room `{id}` not found"))),
    }
}

/// Draw a shareable code from the uppercase alphanumeric alphabet.
fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..ROOM_CODE_ALPHABET.len());
            ROOM_CODE_ALPHABET[index] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig, dao::room_store::memory::MemoryRoomStore, state::AppState,
        state::status::RoomStatus,
    };

    fn test_state() -> SharedState {
        AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        )
    }

    #[test]
    fn generated_codes_use_the_shared_alphabet() {
        for _ in 0..32 {
            let code = generate_room_code();
            assert_eq!(code.len(), ROOM_CODE_LENGTH);
            assert!(code.bytes().all(|b| ROOM_CODE_ALPHABET.contains(&b)));
        }
    }

    #[tokio::test]
    async fn create_join_and_finish_follow_the_room_lifecycle() {
        let state = test_state();

        let created = create_room(
            &state,
            "host-device".into(),
            CreateRoomRequest {
                display_name: "Alex".into(),
                total_holes: 9,
            },
        )
        .await
        .unwrap();

        // Codes are matched case-insensitively.
        let joined = join_room(
            &state,
            "other-device".into(),
            JoinRoomRequest {
                room_code: created.room_code.to_lowercase(),
                display_name: "Sam".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(joined.room_id, created.room_id);

        let snapshot = fetch_room(&state, created.room_id).await.unwrap();
        assert_eq!(snapshot.players.len(), 2);
        assert_eq!(snapshot.host, "host-device");

        let err = finish_room(&state, "other-device", created.room_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotHost(_)));

        let finished = finish_room(&state, "host-device", created.room_id)
            .await
            .unwrap();
        assert_eq!(finished.status, RoomStatus::Finished);

        let err = finish_room(&state, "host-device", created.room_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn joining_a_code_nobody_holds_is_not_found() {
        let state = test_state();

        let err = join_room(
            &state,
            "other-device".into(),
            JoinRoomRequest {
                room_code: "ZZZZZZ".into(),
                display_name: "Sam".into(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
