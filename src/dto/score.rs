use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Payload used by the host to record a player's strokes for one hole.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordScoreRequest {
    /// Device id of the player being scored.
    #[validate(length(min = 1))]
    pub player_id: String,
    /// Hole the strokes land on (1-based).
    #[validate(range(min = 1))]
    pub hole: u16,
    /// Strokes relative to par, negative for under.
    #[validate(range(min = -10, max = 10))]
    pub strokes: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_band_and_hole_floor_are_enforced() {
        let valid = RecordScoreRequest {
            player_id: "device-2".into(),
            hole: 7,
            strokes: -2,
        };
        assert!(valid.validate().is_ok());

        let hole_zero = RecordScoreRequest {
            player_id: "device-2".into(),
            hole: 0,
            strokes: 1,
        };
        assert!(hole_zero.validate().is_err());

        let wild_strokes = RecordScoreRequest {
            player_id: "device-2".into(),
            hole: 7,
            strokes: 42,
        };
        assert!(wild_strokes.validate().is_err());
    }
}
