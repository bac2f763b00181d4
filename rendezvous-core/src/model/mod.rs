mod connection;
mod event;
mod room;

pub use connection::ConnectionId;
pub use event::{ClientEvent, RelayPayload, ServerEvent};
pub use room::{ParseRoomIdError, RoomId, RoomView};
