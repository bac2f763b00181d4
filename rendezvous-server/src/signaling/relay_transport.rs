use async_trait::async_trait;
use rendezvous_core::{ConnectionId, ServerEvent};

/// Delivery capabilities the session coordinator needs from the transport
/// that owns the client connections.
///
/// Groups are named by the room id string a client supplied. Every send is
/// fire-and-forget: implementations drop events for connections that are
/// gone instead of reporting an error.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Add a connection to a broadcast group. Adding twice is a no-op.
    async fn add_to_group(&self, connection_id: ConnectionId, group: &str);

    /// Send an event to one connection.
    async fn send_to(&self, connection_id: ConnectionId, event: ServerEvent);

    /// Send an event to every member of a group.
    async fn send_to_group(&self, group: &str, event: ServerEvent);

    /// Send an event to every member of a group except `except`.
    async fn send_to_group_except(&self, group: &str, except: ConnectionId, event: ServerEvent);

    /// Send an event to every connected client.
    async fn send_to_all(&self, event: ServerEvent);
}
