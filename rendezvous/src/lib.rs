pub use rendezvous_core::model::{ConnectionId, RoomId};
pub use rendezvous_server::router;

pub mod model {
    pub use rendezvous_core::model::*;
}

pub mod server {
    pub use rendezvous_server::*;
}

pub mod config;
