use std::{convert::Infallible, sync::Arc, time::Duration};

use axum::response::sse::{Event, KeepAlive, KeepAliveStream, Sse};
use futures::Stream;
use tokio::sync::watch;
use tokio_stream::{StreamExt, wrappers::WatchStream};
use tracing::warn;
use uuid::Uuid;

use crate::{
    dto::{catalog::CatalogResponse, room::RoomSnapshot, sse::ServerEvent},
    error::ServiceError,
    state::{SharedState, catalog::ChipCatalog, room::GameRoom},
};

/// Event name carried by room snapshot messages.
pub const EVENT_ROOM: &str = "room";
/// Event name carried by catalog messages.
pub const EVENT_CATALOG: &str = "catalog";

/// Look up the document feed of a room.
pub async fn subscribe_room(
    state: &SharedState,
    id: Uuid,
) -> Result<watch::Receiver<GameRoom>, ServiceError> {
    state
        .store()
        .subscribe(id)
        .await?
        .ok_or_else(|| ServiceError::NotFound(format!("room `{id}` not found")))
}

/// Subscribe to the chip catalog feed.
pub fn subscribe_catalog(state: &SharedState) -> watch::Receiver<Arc<ChipCatalog>> {
    state.catalog().subscribe()
}

/// Convert a room document feed into an SSE response.
///
/// The stream opens with the current document and then carries one full
/// snapshot per applied mutation, so clients never reconstruct state from
/// deltas and a late subscriber cannot miss the terminal state.
pub fn room_sse_stream(
    receiver: watch::Receiver<GameRoom>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(receiver).filter_map(|room| {
        match ServerEvent::json(EVENT_ROOM, &RoomSnapshot::from(room)) {
            Ok(payload) => Some(Ok(to_event(payload))),
            Err(err) => {
                warn!(error = %err, "failed to serialise room snapshot for SSE");
                None
            }
        }
    });

    sse_response(stream)
}

/// Convert the catalog feed into an SSE response, opening with the current set.
pub fn catalog_sse_stream(
    receiver: watch::Receiver<Arc<ChipCatalog>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(receiver).filter_map(|catalog| {
        match ServerEvent::json(EVENT_CATALOG, &CatalogResponse::from(catalog.as_ref())) {
            Ok(payload) => Some(Ok(to_event(payload))),
            Err(err) => {
                warn!(error = %err, "failed to serialise catalog for SSE");
                None
            }
        }
    });

    sse_response(stream)
}

fn to_event(payload: ServerEvent) -> Event {
    let mut event = Event::default().data(payload.data);
    if let Some(name) = payload.event {
        event = event.event(name);
    }
    event
}

fn sse_response<S>(stream: S) -> Sse<KeepAliveStream<S>>
where
    S: Stream<Item = Result<Event, Infallible>> + Send + 'static,
{
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        config::AppConfig,
        dao::room_store::memory::MemoryRoomStore,
        dto::room::CreateRoomRequest,
        services::room_service::create_room,
        state::AppState,
    };

    fn test_state() -> SharedState {
        AppState::new(
            Arc::new(MemoryRoomStore::new()),
            AppConfig::default().into_catalog(),
        )
    }

    #[tokio::test]
    async fn room_feed_opens_with_the_current_document() {
        let state = test_state();
        let created = create_room(
            &state,
            "host".into(),
            CreateRoomRequest {
                display_name: "Alex".into(),
                total_holes: 18,
            },
        )
        .await
        .unwrap();

        let receiver = subscribe_room(&state, created.room_id).await.unwrap();
        let mut stream = WatchStream::new(receiver);

        let first = stream.next().await.unwrap();
        assert_eq!(first.id, created.room_id);
        assert_eq!(first.current_hole, 1);
    }

    #[tokio::test]
    async fn unknown_rooms_cannot_be_streamed() {
        let state = test_state();

        let err = subscribe_room(&state, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn catalog_feed_yields_the_stock_set() {
        let state = test_state();

        let catalog = WatchStream::new(subscribe_catalog(&state))
            .next()
            .await
            .unwrap();
        assert!(catalog.contains("Birdie Chip"));
    }
}
