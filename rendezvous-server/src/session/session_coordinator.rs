use crate::room::RoomDirectory;
use crate::session::{NotifyScope, room_list_event};
use crate::signaling::RelayTransport;
use rendezvous_core::{ClientEvent, ConnectionId, RelayPayload, RoomId, ServerEvent};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const CREATE_ROOM_FAILED: &str = "Error occurred when creating a new room.";

/// Turns per-connection events into directory changes and notifications.
///
/// One coordinator serves every connection for the life of the process;
/// clones share the same directory and transport.
#[derive(Clone)]
pub struct SessionCoordinator {
    directory: Arc<RoomDirectory>,
    transport: Arc<dyn RelayTransport>,
}

impl SessionCoordinator {
    pub fn new(directory: Arc<RoomDirectory>, transport: Arc<dyn RelayTransport>) -> Self {
        Self {
            directory,
            transport,
        }
    }

    pub fn directory(&self) -> &Arc<RoomDirectory> {
        &self.directory
    }

    pub async fn handle_event(&self, connection_id: ConnectionId, event: ClientEvent) {
        match event {
            ClientEvent::CreateRoom { name } => self.on_create_room(connection_id, name).await,
            ClientEvent::Join { room_id } => self.on_join_room(connection_id, &room_id).await,
            ClientEvent::LeaveRoom { room_id } => self.on_leave_room(connection_id, &room_id).await,
            ClientEvent::SendMessage { room_id, message } => {
                self.on_send_message(connection_id, &room_id, message).await
            }
            ClientEvent::GetRoomInfo => self.on_get_room_info(connection_id).await,
        }
    }

    pub async fn on_connect(&self, connection_id: ConnectionId) {
        info!("Connection {} opened", connection_id);
    }

    /// Must be called exactly once per connection, however it ended.
    pub async fn on_disconnect(&self, connection_id: ConnectionId) {
        info!("Connection {} closed", connection_id);
        self.directory.delete_room_by_host(connection_id);
        self.notify_room_info(connection_id, NotifyScope::All).await;
    }

    pub async fn on_create_room(&self, connection_id: ConnectionId, name: String) {
        let room = match self.directory.create_room(connection_id, name) {
            Ok(room) => room,
            Err(e) => {
                warn!("Room creation for {} failed: {}", connection_id, e);
                self.transport
                    .send_to(
                        connection_id,
                        ServerEvent::Error {
                            message: CREATE_ROOM_FAILED.to_string(),
                        },
                    )
                    .await;
                return;
            }
        };

        let room_id = room.id.to_string();
        self.transport.add_to_group(connection_id, &room_id).await;
        self.transport
            .send_to(connection_id, ServerEvent::Created { room_id })
            .await;
        self.notify_room_info(connection_id, NotifyScope::All).await;
    }

    /// Joins the group even when `room_id` is not a directory id; only a
    /// parseable id consumes the listed room.
    pub async fn on_join_room(&self, connection_id: ConnectionId, room_id: &str) {
        info!("{} joins room {:?}", connection_id, room_id);

        self.transport.add_to_group(connection_id, room_id).await;
        self.transport
            .send_to(
                connection_id,
                ServerEvent::Joined {
                    room_id: room_id.to_string(),
                },
            )
            .await;
        self.transport
            .send_to_group_except(room_id, connection_id, ServerEvent::Ready)
            .await;

        match room_id.parse::<RoomId>() {
            Ok(id) => {
                self.directory.delete_room_by_id(id);
                self.notify_room_info(connection_id, NotifyScope::All).await;
            }
            Err(e) => debug!("Not consuming a listed room: {}", e),
        }
    }

    pub async fn on_leave_room(&self, connection_id: ConnectionId, room_id: &str) {
        info!("{} leaves room {:?}", connection_id, room_id);
        self.transport.send_to_group(room_id, ServerEvent::Bye).await;
    }

    pub async fn on_send_message(
        &self,
        connection_id: ConnectionId,
        room_id: &str,
        message: RelayPayload,
    ) {
        debug!("Relaying message from {} to room {:?}", connection_id, room_id);
        self.transport
            .send_to_group_except(room_id, connection_id, ServerEvent::Message { message })
            .await;
    }

    pub async fn on_get_room_info(&self, connection_id: ConnectionId) {
        self.notify_room_info(connection_id, NotifyScope::Caller).await;
    }

    async fn notify_room_info(&self, caller: ConnectionId, scope: NotifyScope) {
        let event = room_list_event(&self.directory);
        match scope {
            NotifyScope::Caller => self.transport.send_to(caller, event).await,
            NotifyScope::All => self.transport.send_to_all(event).await,
        }
    }
}
