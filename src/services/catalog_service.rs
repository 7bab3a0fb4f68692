use crate::{dto::catalog::CatalogResponse, state::SharedState};

/// One-shot snapshot of the chip catalog every room plays with.
pub async fn catalog(state: &SharedState) -> CatalogResponse {
    CatalogResponse::from(state.catalog().current().as_ref())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::room_store::memory::MemoryRoomStore,
        state::{AppState, catalog::ChipKind},
    };

    #[tokio::test]
    async fn catalog_lists_chips_in_play_order() {
        let state = AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        );

        let response = catalog(&state).await;
        assert_eq!(response.chips.first().map(|chip| chip.name.as_str()), Some("Ace Chip"));
        assert!(
            response
                .chips
                .iter()
                .any(|chip| chip.name == "Bogey Chip" && chip.kind == ChipKind::Bad)
        );
    }
}
