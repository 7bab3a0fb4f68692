use uuid::Uuid;

use crate::{
    dto::standings::{StandingEntry, StandingsResponse, format_chip_score, format_relative},
    error::ServiceError,
    services::room_service,
    state::{SharedState, catalog::ChipCatalog, room::GameRoom},
};

/// Final scoreboard for a finished room, best total first.
pub async fn standings(
    state: &SharedState,
    room_id: Uuid,
) -> Result<StandingsResponse, ServiceError> {
    let room = room_service::require_room(state, room_id).await?;
    if room.status.is_active() {
        return Err(ServiceError::InvalidState(
            "standings are computed once the round is finished".into(),
        ));
    }

    let catalog = state.catalog().current();
    Ok(StandingsResponse {
        room_id,
        standings: compute_standings(&room, &catalog),
    })
}

/// Fold golf and chip scores into ranked entries; ties keep roster order.
fn compute_standings(room: &GameRoom, catalog: &ChipCatalog) -> Vec<StandingEntry> {
    let mut entries = room
        .players
        .iter()
        .map(|player| {
            let golf_score = room.golf_score(&player.id);
            let chip_score = room.chip_score(&player.id, catalog);
            let total_score = golf_score + chip_score;

            StandingEntry {
                player_id: player.id.clone(),
                player_name: player.name.clone(),
                golf_score,
                golf_score_display: format_relative(golf_score),
                chip_score,
                chip_score_display: format_chip_score(chip_score),
                total_score,
                total_score_display: format_relative(total_score),
                chips_held: room
                    .chips_owned_by(&player.id)
                    .into_iter()
                    .map(str::to_owned)
                    .collect(),
            }
        })
        .collect::<Vec<_>>();

    // Stable sort keeps roster order among equal totals.
    entries.sort_by_key(|entry| entry.total_score);
    entries
}
