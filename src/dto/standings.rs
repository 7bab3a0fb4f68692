use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Final scoreboard line for one player.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StandingEntry {
    pub player_id: String,
    pub player_name: String,
    /// Strokes relative to par summed over every scored hole.
    pub golf_score: i32,
    pub golf_score_display: String,
    /// Modifier from chips held when the round ended.
    pub chip_score: i32,
    pub chip_score_display: String,
    /// Golf and chip scores combined; the round is ranked on this.
    pub total_score: i32,
    pub total_score_display: String,
    /// Chips the player ended the round holding, most recently taken first.
    pub chips_held: Vec<String>,
}

/// Ranked scoreboard produced once a room is finished, best total first.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StandingsResponse {
    pub room_id: Uuid,
    pub standings: Vec<StandingEntry>,
}

/// Format a golf or total score the way a scorecard reads: even par is `E`.
pub(crate) fn format_relative(score: i32) -> String {
    match score {
        0 => "E".to_string(),
        n if n > 0 => format!("+{n}"),
        n => n.to_string(),
    }
}

/// Format a chip score; unlike golf scores an empty hand reads `0`, not `E`.
pub(crate) fn format_chip_score(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golf_scores_read_like_a_scorecard() {
        assert_eq!(format_relative(0), "E");
        assert_eq!(format_relative(3), "+3");
        assert_eq!(format_relative(-2), "-2");
    }

    #[test]
    fn chip_scores_read_zero_when_even() {
        assert_eq!(format_chip_score(0), "0");
        assert_eq!(format_chip_score(2), "+2");
        assert_eq!(format_chip_score(-1), "-1");
    }
}
