use crate::room::RoomDirectory;
use rendezvous_core::ServerEvent;

/// Who receives a room-list update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyScope {
    Caller,
    All,
}

/// Builds the `updateRoom` event for the directory's current contents.
pub fn room_list_event(directory: &RoomDirectory) -> ServerEvent {
    let rooms = directory.list_rooms().iter().map(|room| room.view()).collect();
    ServerEvent::UpdateRoom { rooms }
}
