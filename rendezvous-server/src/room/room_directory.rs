use crate::error::DirectoryError;
use crate::room::Room;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use rendezvous_core::{ConnectionId, RoomId};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info, warn};

/// Registry of open rooms, shared by every session.
///
/// Lookups and removals go straight to the map. Creation is serialised on the
/// id counter so each successful create consumes exactly one id and a failed
/// create leaves the counter where it was.
pub struct RoomDirectory {
    rooms: DashMap<RoomId, Room>,
    next_id: Mutex<RoomId>,
}

impl RoomDirectory {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            next_id: Mutex::new(RoomId::FIRST),
        }
    }

    pub fn create_room(
        &self,
        host: ConnectionId,
        name: impl Into<String>,
    ) -> Result<Room, DirectoryError> {
        let mut next_id = self.next_id.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = self.rooms.iter().find(|entry| entry.host == host) {
            return Err(DirectoryError::HostAlreadyHosting {
                host,
                room_id: existing.id,
            });
        }

        let id = *next_id;
        let following = id.next().ok_or(DirectoryError::IdSpaceExhausted)?;

        // Ids are never reissued, so anything sitting here means the counter went wrong.
        if let Some((_, stale)) = self.rooms.remove(&id) {
            warn!(
                "Evicted stale room {} ({:?}) before reissuing its id",
                stale.id, stale.name
            );
        }

        let room = Room::new(id, name, host);
        match self.rooms.entry(id) {
            Entry::Occupied(_) => return Err(DirectoryError::InsertConflict(id)),
            Entry::Vacant(slot) => {
                slot.insert(room.clone());
            }
        }

        *next_id = following;
        info!("Created room {} ({:?}) for {}", room.id, room.name, host);
        Ok(room)
    }

    pub fn delete_room_by_id(&self, room_id: RoomId) -> Option<Room> {
        let (_, room) = self.rooms.remove(&room_id)?;
        info!("Deleted room {}", room_id);
        Some(room)
    }

    /// Removes every room hosted by `host`. Unknown hosts are a no-op.
    pub fn delete_room_by_host(&self, host: ConnectionId) -> Vec<Room> {
        let hosted: Vec<RoomId> = self
            .rooms
            .iter()
            .filter(|entry| entry.host == host)
            .map(|entry| *entry.key())
            .collect();

        let removed: Vec<Room> = hosted
            .into_iter()
            .filter_map(|id| self.rooms.remove_if(&id, |_, room| room.host == host))
            .map(|(_, room)| room)
            .collect();

        if removed.is_empty() {
            debug!("No rooms hosted by {}", host);
        } else {
            info!("Deleted {} room(s) hosted by {}", removed.len(), host);
        }
        removed
    }

    /// Snapshot of the open rooms, ordered by id.
    pub fn list_rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|entry| entry.value().clone()).collect();
        rooms.sort_by_key(|room| room.id);
        rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// The id the next successful create will receive.
    pub fn next_id(&self) -> RoomId {
        *self.next_id.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RoomDirectory {
    fn default() -> Self {
        Self::new()
    }
}
