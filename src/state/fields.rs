use crate::state::{
    room::{ChipAssignment, GameRoom},
    status::RoomStatus,
};

/// A single dotted-path assignment merged into a room document.
///
/// Updates never replace the whole document; each variant writes exactly one
/// field path and leaves everything else untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// `chipState.<chip>`: hand a chip to a player or return it to the bag.
    Chip {
        /// Catalog name of the chip being moved.
        chip: String,
        /// New holder, or `None` to drop the chip back into the bag.
        owner: Option<String>,
    },
    /// `scores.<playerId>.<hole>`: record strokes-relative-to-par for one hole.
    HoleScore {
        /// Player being scored.
        player_id: String,
        /// Hole the entry applies to (1-based).
        hole: u16,
        /// Strokes relative to par.
        strokes: i32,
    },
    /// `currentHole`: move the hole pointer.
    CurrentHole(u16),
    /// `status`: lifecycle change.
    Status(RoomStatus),
}

impl FieldUpdate {
    /// Dotted field path this update writes, mirroring the stored document shape.
    pub fn path(&self) -> String {
        match self {
            FieldUpdate::Chip { chip, .. } => format!("chipState.{chip}"),
            FieldUpdate::HoleScore {
                player_id, hole, ..
            } => format!("scores.{player_id}.{hole}"),
            FieldUpdate::CurrentHole(_) => "currentHole".into(),
            FieldUpdate::Status(_) => "status".into(),
        }
    }

    /// Merge the assignment into the document.
    ///
    /// The caller must have bumped `room.revision` for the batch already; chip
    /// assignments are stamped with it so arrival order survives in the document.
    pub fn apply(self, room: &mut GameRoom) {
        match self {
            FieldUpdate::Chip { chip, owner } => {
                room.chip_state.insert(
                    chip,
                    ChipAssignment {
                        owner,
                        assigned_at: room.revision,
                    },
                );
            }
            FieldUpdate::HoleScore {
                player_id,
                hole,
                strokes,
            } => {
                room.scores
                    .entry(player_id)
                    .or_default()
                    .insert(hole, strokes);
            }
            FieldUpdate::CurrentHole(hole) => room.current_hole = hole,
            FieldUpdate::Status(status) => room.status = status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::room::Player;

    fn room() -> GameRoom {
        let host = Player {
            id: "p1".into(),
            name: "Alex".into(),
        };
        GameRoom::new(host, "ABC123".into(), 9)
    }

    #[test]
    fn paths_mirror_the_stored_document_shape() {
        assert_eq!(
            FieldUpdate::Chip {
                chip: "Birdie Chip".into(),
                owner: Some("p1".into()),
            }
            .path(),
            "chipState.Birdie Chip"
        );
        assert_eq!(
            FieldUpdate::HoleScore {
                player_id: "p1".into(),
                hole: 3,
                strokes: -1,
            }
            .path(),
            "scores.p1.3"
        );
        assert_eq!(FieldUpdate::CurrentHole(2).path(), "currentHole");
        assert_eq!(FieldUpdate::Status(RoomStatus::Finished).path(), "status");
    }

    #[test]
    fn hole_score_lands_without_disturbing_other_entries() {
        let mut room = room();
        room.revision += 1;
        FieldUpdate::HoleScore {
            player_id: "p1".into(),
            hole: 1,
            strokes: -1,
        }
        .apply(&mut room);
        room.revision += 1;
        FieldUpdate::HoleScore {
            player_id: "p1".into(),
            hole: 2,
            strokes: 3,
        }
        .apply(&mut room);

        let holes = room.scores.get("p1").unwrap();
        assert_eq!(holes.get(&1), Some(&-1));
        assert_eq!(holes.get(&2), Some(&3));
        assert_eq!(room.current_hole, 1);
    }

    #[test]
    fn chip_updates_stamp_the_current_revision() {
        let mut room = room();
        room.revision = 7;
        FieldUpdate::Chip {
            chip: "Birdie Chip".into(),
            owner: Some("p1".into()),
        }
        .apply(&mut room);

        let assignment = room.chip_state.get("Birdie Chip").unwrap();
        assert_eq!(assignment.owner.as_deref(), Some("p1"));
        assert_eq!(assignment.assigned_at, 7);
    }

    #[test]
    fn clearing_then_assigning_matches_a_single_assignment() {
        let mut direct = room();
        direct.revision += 1;
        FieldUpdate::Chip {
            chip: "Birdie Chip".into(),
            owner: Some("p1".into()),
        }
        .apply(&mut direct);

        let mut round_trip = room();
        round_trip.revision += 1;
        FieldUpdate::Chip {
            chip: "Birdie Chip".into(),
            owner: None,
        }
        .apply(&mut round_trip);
        round_trip.revision = direct.revision;
        FieldUpdate::Chip {
            chip: "Birdie Chip".into(),
            owner: Some("p1".into()),
        }
        .apply(&mut round_trip);

        assert_eq!(
            direct.chip_state.get("Birdie Chip"),
            round_trip.chip_state.get("Birdie Chip")
        );
    }

    #[test]
    fn status_update_freezes_the_document_state() {
        let mut room = room();
        FieldUpdate::Status(RoomStatus::Finished).apply(&mut room);
        assert_eq!(room.status, RoomStatus::Finished);
    }
}
