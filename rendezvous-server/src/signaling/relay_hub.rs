use crate::signaling::RelayTransport;
use async_trait::async_trait;
use axum::extract::ws::Message;
use dashmap::DashMap;
use rendezvous_core::{ConnectionId, ServerEvent};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

struct HubInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    groups: DashMap<String, HashSet<ConnectionId>>,
}

/// WebSocket-backed [`RelayTransport`]: tracks the outbound channel of every
/// live connection and the broadcast groups they belong to.
#[derive(Clone)]
pub struct RelayHub {
    inner: Arc<HubInner>,
}

impl RelayHub {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                peers: DashMap::new(),
                groups: DashMap::new(),
            }),
        }
    }

    pub fn register(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(connection_id, tx);
    }

    /// Drops the connection and its group memberships. Empty groups go with it.
    pub fn unregister(&self, connection_id: ConnectionId) {
        self.inner.peers.remove(&connection_id);
        self.inner.groups.retain(|_, members| {
            members.remove(&connection_id);
            !members.is_empty()
        });
    }

    pub fn connection_count(&self) -> usize {
        self.inner.peers.len()
    }

    pub fn group_members(&self, group: &str) -> Vec<ConnectionId> {
        self.inner
            .groups
            .get(group)
            .map(|members| members.iter().copied().collect())
            .unwrap_or_default()
    }

    fn encode(event: &ServerEvent) -> Option<Message> {
        match serde_json::to_string(event) {
            Ok(json) => Some(Message::Text(json.into())),
            Err(e) => {
                error!("Failed to serialize server event: {}", e);
                None
            }
        }
    }

    fn deliver(&self, connection_id: ConnectionId, msg: Message) {
        if let Some(peer) = self.inner.peers.get(&connection_id) {
            if let Err(e) = peer.send(msg) {
                error!("Failed to send WS message to {}: {:?}", connection_id, e);
            }
        } else {
            warn!(
                "Attempted to send event to disconnected connection {}",
                connection_id
            );
        }
    }

    fn deliver_to_group(&self, group: &str, except: Option<ConnectionId>, event: &ServerEvent) {
        let members = self.group_members(group);
        if members.is_empty() {
            debug!("Group {:?} has no members", group);
            return;
        }

        let Some(msg) = Self::encode(event) else {
            return;
        };
        for member in members.into_iter().filter(|m| Some(*m) != except) {
            self.deliver(member, msg.clone());
        }
    }
}

impl Default for RelayHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayTransport for RelayHub {
    async fn add_to_group(&self, connection_id: ConnectionId, group: &str) {
        self.inner
            .groups
            .entry(group.to_string())
            .or_default()
            .insert(connection_id);
    }

    async fn send_to(&self, connection_id: ConnectionId, event: ServerEvent) {
        if let Some(msg) = Self::encode(&event) {
            self.deliver(connection_id, msg);
        }
    }

    async fn send_to_group(&self, group: &str, event: ServerEvent) {
        self.deliver_to_group(group, None, &event);
    }

    async fn send_to_group_except(&self, group: &str, except: ConnectionId, event: ServerEvent) {
        self.deliver_to_group(group, Some(except), &event);
    }

    async fn send_to_all(&self, event: ServerEvent) {
        let Some(msg) = Self::encode(&event) else {
            return;
        };
        let peers: Vec<ConnectionId> = self.inner.peers.iter().map(|p| *p.key()).collect();
        for peer in peers {
            self.deliver(peer, msg.clone());
        }
    }
}
