use crate::room::RoomDirectory;
use crate::session::SessionCoordinator;
use crate::signaling::RelayHub;
use std::sync::Arc;

/// Everything a WebSocket session needs, cloned into each handler.
#[derive(Clone)]
pub struct AppState {
    pub hub: RelayHub,
    pub coordinator: SessionCoordinator,
}

impl AppState {
    /// Wires a fresh directory and hub into a coordinator.
    pub fn new() -> Self {
        Self::with_directory(Arc::new(RoomDirectory::new()))
    }

    pub fn with_directory(directory: Arc<RoomDirectory>) -> Self {
        let hub = RelayHub::new();
        let coordinator = SessionCoordinator::new(directory, Arc::new(hub.clone()));
        Self { hub, coordinator }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
