use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use utoipa::ToSchema;

/// Whether holding a chip helps or hurts the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChipKind {
    /// Counts one under when the round ends.
    Good,
    /// Counts one over when the round ends.
    Bad,
}

/// Definition of a single chip in the shared pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipDefinition {
    /// Scoring direction of the chip.
    pub kind: ChipKind,
    /// How the chip is earned, shown to players.
    pub description: String,
}

/// Ordered set of chip definitions shared by every room, keyed by unique name.
#[derive(Debug, Clone, Default)]
pub struct ChipCatalog {
    chips: IndexMap<String, ChipDefinition>,
}

impl ChipCatalog {
    /// Build a catalog from an ordered name-to-definition map.
    pub fn new(chips: IndexMap<String, ChipDefinition>) -> Self {
        Self { chips }
    }

    /// Whether a chip with this name is in play.
    pub fn contains(&self, name: &str) -> bool {
        self.chips.contains_key(name)
    }

    /// Scoring direction of a chip, if it is in the catalog.
    pub fn kind_of(&self, name: &str) -> Option<ChipKind> {
        self.chips.get(name).map(|definition| definition.kind)
    }

    /// Chip names in play order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.chips.keys().map(String::as_str)
    }

    /// Iterate over every chip definition in play order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChipDefinition)> {
        self.chips.iter()
    }

    /// Number of chips in play.
    pub fn len(&self) -> usize {
        self.chips.len()
    }

    /// Whether the catalog holds no chips at all.
    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}

/// Live feed sharing the chip catalog with subscribers.
///
/// The catalog is loaded once at startup; the feed exists so clients observe it
/// through the same snapshot-then-changes contract as room documents.
pub struct CatalogFeed {
    sender: watch::Sender<Arc<ChipCatalog>>,
}

impl CatalogFeed {
    /// Wrap a loaded catalog in a watch channel.
    pub fn new(catalog: ChipCatalog) -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(catalog));
        Self { sender }
    }

    /// Current catalog snapshot.
    pub fn current(&self) -> Arc<ChipCatalog> {
        self.sender.borrow().clone()
    }

    /// Register a new subscriber that observes the current catalog and any replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ChipCatalog>> {
        self.sender.subscribe()
    }
}
