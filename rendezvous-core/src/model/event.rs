use crate::model::room::RoomView;
use serde::{Deserialize, Serialize};

/// Relay body exchanged between peers (SDP, ICE candidates, anything else).
///
/// Carried through the server untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayPayload(pub serde_json::Value);

impl From<serde_json::Value> for RelayPayload {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Requests a client may send to the relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    CreateRoom {
        name: String,
    },
    Join {
        room_id: String,
    },
    LeaveRoom {
        room_id: String,
    },
    SendMessage {
        room_id: String,
        message: RelayPayload,
    },
    GetRoomInfo,
}

/// Notifications the relay pushes to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "d",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    /// The caller's room was created and is now listed.
    Created {
        room_id: String,
    },
    Error {
        message: String,
    },
    Joined {
        room_id: String,
    },
    /// Someone else joined the group; peer negotiation may begin.
    Ready,
    Bye,
    Message {
        message: RelayPayload,
    },
    UpdateRoom {
        rooms: Vec<RoomView>,
    },
}
