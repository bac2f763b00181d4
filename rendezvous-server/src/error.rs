use rendezvous_core::{ConnectionId, RoomId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("room {0} is already present in the directory")]
    InsertConflict(RoomId),

    #[error("connection {host} already hosts room {room_id}")]
    HostAlreadyHosting { host: ConnectionId, room_id: RoomId },

    #[error("room identifier space exhausted")]
    IdSpaceExhausted,
}
