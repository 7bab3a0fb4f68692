use uuid::Uuid;

use crate::{
    dto::{
        chip::{AssignChipRequest, TransferChipRequest},
        room::RoomSnapshot,
    },
    error::ServiceError,
    services::room_service,
    state::{SharedState, fields::FieldUpdate},
};

/// Hand a chip to a player or drop it back into the bag. Host only.
///
/// No precondition on the previous holder: the host moves chips freely,
/// including straight from one player to another.
pub async fn assign_chip(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
    request: AssignChipRequest,
) -> Result<RoomSnapshot, ServiceError> {
    let room = room_service::require_room(state, room_id).await?;
    room_service::ensure_host(&room, device_id)?;
    room_service::ensure_active(&room)?;
    ensure_cataloged(state, &request.chip)?;

    if let Some(ref owner) = request.owner {
        if !room.roster_contains(owner) {
            return Err(ServiceError::InvalidInput(format!(
                "player `{owner}` is not in this room"
            )));
        }
    }

    room_service::apply_updates(
        state,
        room_id,
        vec![FieldUpdate::Chip {
            chip: request.chip,
            owner: request.owner,
        }],
    )
    .await
}

/// Pass a held chip on to another player. Holder only.
///
/// The ownership check reads the current document and the write lands as a
/// separate step, so two racing transfers of one chip resolve by arrival
/// order at the store.
pub async fn transfer_chip(
    state: &SharedState,
    device_id: &str,
    room_id: Uuid,
    request: TransferChipRequest,
) -> Result<RoomSnapshot, ServiceError> {
    let room = room_service::require_room(state, room_id).await?;
    room_service::ensure_active(&room)?;
    ensure_cataloged(state, &request.chip)?;

    if !room.roster_contains(&request.new_owner) {
        return Err(ServiceError::InvalidInput(format!(
            "player `{}` is not in this room",
            request.new_owner
        )));
    }

    if !room.owns_chip(device_id, &request.chip) {
        return Err(ServiceError::NotOwner {
            chip: request.chip,
            requester: device_id.to_owned(),
        });
    }

    room_service::apply_updates(
        state,
        room_id,
        vec![FieldUpdate::Chip {
            chip: request.chip,
            owner: Some(request.new_owner),
        }],
    )
    .await
}

fn ensure_cataloged(state: &SharedState, chip: &str) -> Result<(), ServiceError> {
    if !state.catalog().current().contains(chip) {
        return Err(ServiceError::InvalidInput(format!(
            "chip `{chip}` is not in the catalog"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::room_store::memory::MemoryRoomStore,
        dto::room::{CreateRoomRequest, JoinRoomRequest},
        services::room_service::{create_room, join_room},
        state::AppState,
    };

    async fn state_with_two_players() -> (SharedState, Uuid) {
        let state = AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        );
        let created = create_room(
            &state,
            "host".into(),
            CreateRoomRequest {
                display_name: "Alex".into(),
                total_holes: 18,
            },
        )
        .await
        .unwrap();
        join_room(
            &state,
            "guest".into(),
            JoinRoomRequest {
                room_code: created.room_code.clone(),
                display_name: "Sam".into(),
            },
        )
        .await
        .unwrap();
        (state, created.room_id)
    }

    #[tokio::test]
    async fn host_hands_out_and_bags_chips() {
        let (state, room_id) = state_with_two_players().await;

        let snapshot = assign_chip(
            &state,
            "host",
            room_id,
            AssignChipRequest {
                chip: "Birdie Chip".into(),
                owner: Some("guest".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(
            snapshot.chip_state.get("Birdie Chip").unwrap().owner,
            Some("guest".to_owned())
        );

        let snapshot = assign_chip(
            &state,
            "host",
            room_id,
            AssignChipRequest {
                chip: "Birdie Chip".into(),
                owner: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(snapshot.chip_state.get("Birdie Chip").unwrap().owner, None);
    }

    #[tokio::test]
    async fn assignments_are_validated_before_anything_lands() {
        let (state, room_id) = state_with_two_players().await;

        let err = assign_chip(
            &state,
            "guest",
            room_id,
            AssignChipRequest {
                chip: "Birdie Chip".into(),
                owner: Some("guest".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotHost(_)));

        let err = assign_chip(
            &state,
            "host",
            room_id,
            AssignChipRequest {
                chip: "Imaginary Chip".into(),
                owner: Some("guest".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let err = assign_chip(
            &state,
            "host",
            room_id,
            AssignChipRequest {
                chip: "Birdie Chip".into(),
                owner: Some("stranger".into()),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn only_the_holder_can_pass_a_chip_on() {
        let (state, room_id) = state_with_two_players().await;

        assign_chip(
            &state,
            "host",
            room_id,
            AssignChipRequest {
                chip: "Bogey Chip".into(),
                owner: Some("host".into()),
            },
        )
        .await
        .unwrap();

        let err = transfer_chip(
            &state,
            "guest",
            room_id,
            TransferChipRequest {
                chip: "Bogey Chip".into(),
                new_owner: "guest".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotOwner { .. }));

        // The rejected transfer must leave ownership untouched.
        let room = room_service::require_room(&state, room_id).await.unwrap();
        assert!(room.owns_chip("host", "Bogey Chip"));

        let snapshot = transfer_chip(
            &state,
            "host",
            room_id,
            TransferChipRequest {
                chip: "Bogey Chip".into(),
                new_owner: "guest".into(),
            },
        )
        .await
        .unwrap();
        assert_eq!(
            snapshot.chip_state.get("Bogey Chip").unwrap().owner,
            Some("guest".to_owned())
        );
    }
}
