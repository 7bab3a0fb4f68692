use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    dto::{
        format_system_time,
        validation::{validate_display_name, validate_room_code},
    },
    state::{
        room::{ChipAssignment, GameRoom, Player},
        status::RoomStatus,
    },
};

/// Widest round a room can be opened for.
const MAX_TOTAL_HOLES: u16 = 36;

/// Payload used to open a brand-new room.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Name the host appears under on the roster.
    pub display_name: String,
    /// Holes the round is played over. Defaults to a full round of 18.
    #[serde(default = "default_total_holes")]
    pub total_holes: u16,
}

fn default_total_holes() -> u16 {
    18
}

impl Validate for CreateRoomRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_display_name(&self.display_name) {
            errors.add("displayName", e);
        }

        if !(1..=MAX_TOTAL_HOLES).contains(&self.total_holes) {
            let mut err = ValidationError::new("total_holes_range");
            err.message =
                Some(format!("Total holes must be between 1 and {MAX_TOTAL_HOLES}").into());
            errors.add("totalHoles", err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Payload used to enter an existing room by its share code.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoomRequest {
    /// Six character code shown on the host's screen.
    pub room_code: String,
    /// Name the joining player appears under on the roster.
    pub display_name: String,
}

impl Validate for JoinRoomRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_room_code(&self.room_code) {
            errors.add("roomCode", e);
        }

        if let Err(e) = validate_display_name(&self.display_name) {
            errors.add("displayName", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Summary returned once a room has been opened.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedResponse {
    /// Primary key used in every room route.
    pub room_id: Uuid,
    /// Code the host reads out so others can join.
    pub room_code: String,
}

/// Summary returned once a player has joined a room.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomJoinedResponse {
    /// Primary key used in every room route.
    pub room_id: Uuid,
}

/// Roster entry exposed to REST/SSE clients.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
}

/// Holder record for a single chip inside a room snapshot.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChipAssignmentDto {
    /// Device id of the current holder, or `null` while the chip sits in the bag.
    pub owner: Option<String>,
    /// Room revision at which the chip last changed hands.
    pub assigned_at: u64,
}

/// Full projection of a room document, served over REST and SSE alike.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshot {
    pub id: Uuid,
    pub room_code: String,
    /// Device id of the room creator.
    pub host: String,
    /// Roster in join order; the host is always first.
    pub players: Vec<PlayerDto>,
    /// Chip name to holder record, in the order chips were first touched.
    pub chip_state: IndexMap<String, ChipAssignmentDto>,
    /// Player id to per-hole strokes-relative-to-par, holes keyed by number.
    pub scores: IndexMap<String, BTreeMap<u16, i32>>,
    /// Hole currently being played (1-based).
    pub current_hole: u16,
    pub total_holes: u16,
    pub status: RoomStatus,
    pub created_at: String,
    /// Monotonic document revision, bumped on every applied mutation.
    pub revision: u64,
}

impl From<Player> for PlayerDto {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
        }
    }
}

impl From<ChipAssignment> for ChipAssignmentDto {
    fn from(assignment: ChipAssignment) -> Self {
        Self {
            owner: assignment.owner,
            assigned_at: assignment.assigned_at,
        }
    }
}

impl From<GameRoom> for RoomSnapshot {
    fn from(room: GameRoom) -> Self {
        Self {
            id: room.id,
            room_code: room.room_code,
            host: room.host,
            players: room.players.into_iter().map(Into::into).collect(),
            chip_state: room
                .chip_state
                .into_iter()
                .map(|(chip, assignment)| (chip, assignment.into()))
                .collect(),
            scores: room.scores,
            current_hole: room.current_hole,
            total_holes: room.total_holes,
            status: room.status,
            created_at: format_system_time(room.created_at),
            revision: room.revision,
        }
    }
}
