pub mod catalog;
pub mod fields;
pub mod room;
pub mod status;

use std::sync::Arc;

use crate::dao::room_store::RoomStore;
use crate::state::catalog::{CatalogFeed, ChipCatalog};

/// Cheaply cloneable handle on the shared application state.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    store: Arc<dyn RoomStore>,
    catalog: CatalogFeed,
}

impl AppState {
    /// Construct the shared state around a room store and the loaded chip catalog,
    /// wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(store: Arc<dyn RoomStore>, catalog: ChipCatalog) -> SharedState {
        Arc::new(Self {
            store,
            catalog: CatalogFeed::new(catalog),
        })
    }

    /// Handle to the authoritative room store.
    pub fn store(&self) -> Arc<dyn RoomStore> {
        self.store.clone()
    }

    /// Live chip catalog feed.
    pub fn catalog(&self) -> &CatalogFeed {
        &self.catalog
    }
}
