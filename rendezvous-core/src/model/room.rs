use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Numeric room identifier issued by the room directory.
///
/// On the wire it travels as a decimal string, which doubles as the name of
/// the broadcast group the room's participants share.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct RoomId(pub u64);

impl RoomId {
    pub const FIRST: RoomId = RoomId(1);

    pub fn next(self) -> Option<RoomId> {
        self.0.checked_add(1).map(RoomId)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed room identifier: {0:?}")]
pub struct ParseRoomIdError(pub String);

/// Only the canonical decimal form parses: the string must be exactly what
/// `Display` produces, since it also names the room's broadcast group.
impl FromStr for RoomId {
    type Err = ParseRoomIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(id) if RoomId(id).to_string() == s => Ok(RoomId(id)),
            _ => Err(ParseRoomIdError(s.to_string())),
        }
    }
}

/// Public projection of an open room. The host connection is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub room_id: String,
    pub name: String,
}

impl RoomView {
    pub fn new(room_id: RoomId, name: impl Into<String>) -> Self {
        Self {
            room_id: room_id.to_string(),
            name: name.into(),
        }
    }
}
