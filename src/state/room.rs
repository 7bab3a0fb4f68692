use std::collections::BTreeMap;
use std::time::SystemTime;

use indexmap::IndexMap;
use uuid::Uuid;

use crate::state::{
    catalog::{ChipCatalog, ChipKind},
    status::RoomStatus,
};

/// Characters a room code is drawn from.
pub const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Length of a shareable room code.
pub const ROOM_CODE_LENGTH: usize = 6;

/// Player info tracked inside a room document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable device identifier presented by the client.
    pub id: String,
    /// Display name chosen by the player.
    pub name: String,
}

/// Ownership record for a single chip inside a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipAssignment {
    /// Device id of the current holder, or `None` while the chip sits in the bag.
    pub owner: Option<String>,
    /// Room revision at which the assignment landed; orders most-recent-first displays.
    pub assigned_at: u64,
}

/// The shared game document every client of a room observes and mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRoom {
    /// Primary key of the room.
    pub id: Uuid,
    /// Shareable join code, stored uppercase.
    pub room_code: String,
    /// Roster in join order; the host is always first.
    pub players: Vec<Player>,
    /// Device id of the player who created the room.
    pub host: String,
    /// Chip name to ownership record; absent entries mean the chip never left the bag.
    pub chip_state: IndexMap<String, ChipAssignment>,
    /// Player id to per-hole strokes-relative-to-par.
    pub scores: IndexMap<String, BTreeMap<u16, i32>>,
    /// Hole currently being played (1-based).
    pub current_hole: u16,
    /// Number of holes fixed at creation.
    pub total_holes: u16,
    /// Lifecycle status of the round.
    pub status: RoomStatus,
    /// Creation timestamp for auditing/debugging.
    pub created_at: SystemTime,
    /// Bumped on every stored mutation; stamps chip assignments.
    pub revision: u64,
}

impl GameRoom {
    /// Build a fresh room document with the creator as host and sole roster entry.
    pub fn new(host: Player, room_code: String, total_holes: u16) -> Self {
        let mut scores = IndexMap::new();
        scores.insert(host.id.clone(), BTreeMap::new());

        Self {
            id: Uuid::new_v4(),
            room_code,
            host: host.id.clone(),
            players: vec![host],
            chip_state: IndexMap::new(),
            scores,
            current_hole: 1,
            total_holes,
            status: RoomStatus::Active,
            created_at: SystemTime::now(),
            revision: 0,
        }
    }

    /// Whether the given player created this room.
    pub fn is_host(&self, player_id: &str) -> bool {
        self.host == player_id
    }

    /// Whether the given player is on the roster.
    pub fn roster_contains(&self, player_id: &str) -> bool {
        self.players.iter().any(|player| player.id == player_id)
    }

    /// Current holder of a chip, if any.
    pub fn owner_of(&self, chip: &str) -> Option<&str> {
        self.chip_state
            .get(chip)
            .and_then(|assignment| assignment.owner.as_deref())
    }

    /// Whether the given player currently holds the chip.
    pub fn owns_chip(&self, player_id: &str, chip: &str) -> bool {
        self.owner_of(chip) == Some(player_id)
    }

    /// Chips currently held by a player, most recently assigned first.
    pub fn chips_owned_by(&self, player_id: &str) -> Vec<&str> {
        let mut owned: Vec<(&str, u64)> = self
            .chip_state
            .iter()
            .filter(|(_, assignment)| assignment.owner.as_deref() == Some(player_id))
            .map(|(name, assignment)| (name.as_str(), assignment.assigned_at))
            .collect();

        owned.sort_by(|a, b| b.1.cmp(&a.1));
        owned.into_iter().map(|(name, _)| name).collect()
    }

    /// Catalog chips nobody currently holds, in play order.
    pub fn chips_in_bag<'a>(&self, catalog: &'a ChipCatalog) -> Vec<&'a str> {
        catalog
            .names()
            .filter(|name| self.owner_of(name).is_none())
            .collect()
    }

    /// Sum of the player's recorded per-hole strokes-relative-to-par.
    ///
    /// Holes with no entry contribute nothing.
    pub fn golf_score(&self, player_id: &str) -> i32 {
        self.scores
            .get(player_id)
            .map(|holes| holes.values().sum())
            .unwrap_or(0)
    }

    /// Chip modifier for a player: one over per bad chip held, one under per good chip.
    ///
    /// Chips missing from the catalog contribute nothing.
    pub fn chip_score(&self, player_id: &str, catalog: &ChipCatalog) -> i32 {
        self.chip_state
            .iter()
            .filter(|(_, assignment)| assignment.owner.as_deref() == Some(player_id))
            .fold(0, |score, (name, _)| match catalog.kind_of(name) {
                Some(ChipKind::Good) => score - 1,
                Some(ChipKind::Bad) => score + 1,
                None => score,
            })
    }
}
