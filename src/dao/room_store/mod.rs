pub mod memory;

use futures::future::BoxFuture;
use tokio::sync::watch;
use uuid::Uuid;

use crate::dao::storage::StorageResult;
use crate::state::{
    fields::FieldUpdate,
    room::{GameRoom, Player},
};

/// Result of attempting a mutation against a stored room document.
#[derive(Debug)]
pub enum UpdateOutcome {
    /// The mutation landed; carries the document exactly as broadcast to subscribers.
    Applied(GameRoom),
    /// The round already finished, so the document is frozen; nothing changed.
    Frozen(GameRoom),
}

/// Abstraction over the authoritative room store.
///
/// Room documents are only ever mutated through the narrow operations below,
/// never replaced wholesale. Implementations must make each operation atomic
/// with respect to concurrent callers and fan the resulting document out to
/// every subscriber of the room. Backends without an atomic roster append must
/// implement `join_by_code` with an optimistic-concurrency retry so concurrent
/// joins cannot drop a player.
pub trait RoomStore: Send + Sync {
    /// Insert a freshly created room.
    ///
    /// Fails with [`crate::dao::storage::StorageError::DuplicateRoomCode`] when
    /// an active room already holds the same code.
    fn insert_room(&self, room: GameRoom) -> BoxFuture<'static, StorageResult<()>>;

    /// Point-in-time copy of a room document, finished rooms included.
    fn find_room(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameRoom>>>;

    /// Append a player to the active room holding `code`, seeding an empty score map.
    ///
    /// The append is idempotent: a device id already on the roster joins
    /// successfully without duplicating the entry or notifying subscribers.
    /// Returns `None` when no active room holds the code.
    fn join_by_code(
        &self,
        code: String,
        player: Player,
    ) -> BoxFuture<'static, StorageResult<Option<UpdateOutcome>>>;

    /// Merge a batch of field updates into a room document and broadcast the result.
    ///
    /// The whole batch lands under a single revision bump. Returns `None` when
    /// the room id is unknown.
    fn update_fields(
        &self,
        id: Uuid,
        updates: Vec<FieldUpdate>,
    ) -> BoxFuture<'static, StorageResult<Option<UpdateOutcome>>>;

    /// Observe a room document.
    ///
    /// The receiver holds the current document immediately and yields a fresh
    /// full copy after every mutation, so a late or re-attached subscriber never
    /// misses the terminal state.
    fn subscribe(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<watch::Receiver<GameRoom>>>>;

    /// Verify the backend is reachable.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
