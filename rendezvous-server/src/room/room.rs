use rendezvous_core::{ConnectionId, RoomId, RoomView};

/// An open lobby waiting for a second party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub host: ConnectionId,
}

impl Room {
    pub fn new(id: RoomId, name: impl Into<String>, host: ConnectionId) -> Self {
        Self {
            id,
            name: name.into(),
            host,
        }
    }

    pub fn view(&self) -> RoomView {
        RoomView::new(self.id, self.name.clone())
    }
}
