use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Lifecycle states a game room can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    /// Round in progress; the document accepts mutations.
    Active,
    /// Round over; the document is frozen and standings can be computed.
    Finished,
}

/// Events that can be applied to a room's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// Host ends the round.
    Finish,
}

/// Error returned when attempting to apply an invalid lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transition: {event:?} cannot be applied while {from:?}")]
pub struct InvalidTransition {
    /// Status the room was in when the invalid event was received.
    pub from: RoomStatus,
    /// The event that cannot be applied from this status.
    pub event: StatusEvent,
}

impl RoomStatus {
    /// Compute the next status for an event if the transition is valid.
    pub fn transition(self, event: StatusEvent) -> Result<RoomStatus, InvalidTransition> {
        match (self, event) {
            (RoomStatus::Active, StatusEvent::Finish) => Ok(RoomStatus::Finished),
            (from, event) => Err(InvalidTransition { from, event }),
        }
    }

    /// Whether the room still accepts mutations.
    pub fn is_active(self) -> bool {
        matches!(self, RoomStatus::Active)
    }
}

/// Direction the host can move the current-hole pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleStep {
    /// Move on to the next hole.
    Forward,
    /// Return to the previous hole to correct an entry.
    Back,
}

/// Error returned when the current-hole pointer cannot move in the requested direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoleStepError {
    /// The pointer is already on the first hole.
    #[error("already on the first hole")]
    AtFirstHole,
    /// The pointer is already on the last hole; the round must be finished instead.
    #[error("already on the last hole of {total_holes}; finish the round instead")]
    AtLastHole {
        /// Number of holes the round was created with.
        total_holes: u16,
    },
}

/// Compute the next current-hole value, keeping the pointer within `1..=total_holes`.
pub fn step_hole(current: u16, total_holes: u16, step: HoleStep) -> Result<u16, HoleStepError> {
    match step {
        HoleStep::Forward if current >= total_holes => {
            Err(HoleStepError::AtLastHole { total_holes })
        }
        HoleStep::Forward => Ok(current + 1),
        HoleStep::Back if current <= 1 => Err(HoleStepError::AtFirstHole),
        HoleStep::Back => Ok(current - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_is_the_only_legal_transition() {
        assert_eq!(
            RoomStatus::Active.transition(StatusEvent::Finish),
            Ok(RoomStatus::Finished)
        );
    }

    #[test]
    fn finished_rooms_reject_further_events() {
        let err = RoomStatus::Finished
            .transition(StatusEvent::Finish)
            .unwrap_err();
        assert_eq!(err.from, RoomStatus::Finished);
        assert_eq!(err.event, StatusEvent::Finish);
    }

    #[test]
    fn hole_pointer_walks_the_full_round() {
        let mut hole = 1;
        for expected in 2..=9 {
            hole = step_hole(hole, 9, HoleStep::Forward).unwrap();
            assert_eq!(hole, expected);
        }
        assert_eq!(
            step_hole(hole, 9, HoleStep::Forward),
            Err(HoleStepError::AtLastHole { total_holes: 9 })
        );
    }

    #[test]
    fn hole_pointer_cannot_drop_below_one() {
        assert_eq!(step_hole(2, 9, HoleStep::Back), Ok(1));
        assert_eq!(step_hole(1, 9, HoleStep::Back), Err(HoleStepError::AtFirstHole));
    }

    #[test]
    fn single_hole_round_is_immediately_at_the_end() {
        assert_eq!(
            step_hole(1, 1, HoleStep::Forward),
            Err(HoleStepError::AtLastHole { total_holes: 1 })
        );
    }
}
