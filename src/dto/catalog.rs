use serde::Serialize;
use utoipa::ToSchema;

use crate::state::catalog::{ChipCatalog, ChipKind};

/// One chip definition exposed by the catalog endpoints.
#[derive(Debug, Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChipTypeDto {
    /// Unique chip name, the key used in room `chipState` maps.
    pub name: String,
    /// Scoring direction of the chip.
    #[serde(rename = "type")]
    pub kind: ChipKind,
    /// How the chip is earned, shown to players.
    pub description: String,
}

/// Chip set available in every room, in play order.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub chips: Vec<ChipTypeDto>,
}

impl From<&ChipCatalog> for CatalogResponse {
    fn from(catalog: &ChipCatalog) -> Self {
        let chips = catalog
            .iter()
            .map(|(name, definition)| ChipTypeDto {
                name: name.clone(),
                kind: definition.kind,
                description: definition.description.clone(),
            })
            .collect();

        Self { chips }
    }
}
