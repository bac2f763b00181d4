mod relay_hub;
mod relay_transport;
mod router;
mod ws_handler;

pub use relay_hub::*;
pub use relay_transport::*;
pub use router::*;
pub use ws_handler::*;
