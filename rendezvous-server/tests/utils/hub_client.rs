use axum::extract::ws::Message;
use rendezvous_core::{ConnectionId, ServerEvent};
use rendezvous_server::RelayHub;
use tokio::sync::mpsc;

/// Stand-in for a WebSocket peer: registers an outbound channel on the hub
/// and decodes whatever the hub writes to it.
pub struct HubClient {
    pub id: ConnectionId,
    rx: mpsc::UnboundedReceiver<Message>,
}

impl HubClient {
    pub fn connect(hub: &RelayHub) -> Self {
        let id = ConnectionId::new();
        let (tx, rx) = mpsc::unbounded_channel();
        hub.register(id, tx);
        Self { id, rx }
    }

    /// Everything received so far.
    pub fn drain(&mut self) -> Vec<ServerEvent> {
        let mut events = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            if let Message::Text(text) = msg {
                match serde_json::from_str(text.as_str()) {
                    Ok(event) => events.push(event),
                    Err(e) => panic!("hub sent undecodable frame {:?}: {}", text.as_str(), e),
                }
            }
        }
        events
    }
}
