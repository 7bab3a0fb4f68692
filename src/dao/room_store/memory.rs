use std::sync::Arc;

use dashmap::DashMap;
use futures::future::BoxFuture;
use tokio::sync::watch;
use uuid::Uuid;

use crate::dao::{
    room_store::{RoomStore, UpdateOutcome},
    storage::{StorageError, StorageResult},
};
use crate::state::{
    fields::FieldUpdate,
    room::{GameRoom, Player},
};

/// In-process room store keeping one watch channel per room.
///
/// The channel holds the authoritative document: `send_if_modified` gives an
/// atomic read-modify-write per room and doubles as the fan-out to subscribers,
/// so per-field last-write-wins ordering is simply lock arrival order.
#[derive(Clone, Default)]
pub struct MemoryRoomStore {
    rooms: Arc<DashMap<Uuid, watch::Sender<GameRoom>>>,
}

impl MemoryRoomStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_room_sync(&self, room: GameRoom) -> StorageResult<()> {
        // The collision scan and the insert are separate steps; two concurrent
        // creations drawing the same code can slip through the scan.
        let code = room.room_code.clone();
        let collision = self.rooms.iter().any(|entry| {
            let doc = entry.value().borrow();
            doc.status.is_active() && doc.room_code == code
        });

        if collision {
            return Err(StorageError::DuplicateRoomCode { code });
        }

        let id = room.id;
        let (sender, _receiver) = watch::channel(room);
        self.rooms.insert(id, sender);
        Ok(())
    }

    fn find_room_sync(&self, id: Uuid) -> Option<GameRoom> {
        self.rooms.get(&id).map(|entry| entry.value().borrow().clone())
    }

    fn join_by_code_sync(&self, code: String, player: Player) -> Option<UpdateOutcome> {
        let id = self.rooms.iter().find_map(|entry| {
            let doc = entry.value().borrow();
            (doc.status.is_active() && doc.room_code == code).then(|| *entry.key())
        })?;

        let entry = self.rooms.get(&id)?;
        let mut outcome = None;
        entry.value().send_if_modified(|room| {
            if !room.status.is_active() {
                outcome = Some(UpdateOutcome::Frozen(room.clone()));
                return false;
            }

            if room.roster_contains(&player.id) {
                outcome = Some(UpdateOutcome::Applied(room.clone()));
                return false;
            }

            room.revision += 1;
            room.scores.entry(player.id.clone()).or_default();
            room.players.push(player);
            outcome = Some(UpdateOutcome::Applied(room.clone()));
            true
        });

        outcome
    }

    fn update_fields_sync(&self, id: Uuid, updates: Vec<FieldUpdate>) -> Option<UpdateOutcome> {
        let entry = self.rooms.get(&id)?;
        let mut outcome = None;
        entry.value().send_if_modified(|room| {
            if !room.status.is_active() {
                outcome = Some(UpdateOutcome::Frozen(room.clone()));
                return false;
            }

            if updates.is_empty() {
                outcome = Some(UpdateOutcome::Applied(room.clone()));
                return false;
            }

            room.revision += 1;
            for update in updates {
                update.apply(room);
            }
            outcome = Some(UpdateOutcome::Applied(room.clone()));
            true
        });

        outcome
    }

    fn subscribe_sync(&self, id: Uuid) -> Option<watch::Receiver<GameRoom>> {
        self.rooms.get(&id).map(|entry| entry.value().subscribe())
    }
}

impl RoomStore for MemoryRoomStore {
    fn insert_room(&self, room: GameRoom) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.insert_room_sync(room) })
    }

    fn find_room(&self, id: Uuid) -> BoxFuture<'static, StorageResult<Option<GameRoom>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.find_room_sync(id)) })
    }

    fn join_by_code(
        &self,
        code: String,
        player: Player,
    ) -> BoxFuture<'static, StorageResult<Option<UpdateOutcome>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.join_by_code_sync(code, player)) })
    }

    fn update_fields(
        &self,
        id: Uuid,
        updates: Vec<FieldUpdate>,
    ) -> BoxFuture<'static, StorageResult<Option<UpdateOutcome>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.update_fields_sync(id, updates)) })
    }

    fn subscribe(
        &self,
        id: Uuid,
    ) -> BoxFuture<'static, StorageResult<Option<watch::Receiver<GameRoom>>>> {
        let store = self.clone();
        Box::pin(async move { Ok(store.subscribe_sync(id)) })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}
