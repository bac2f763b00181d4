mod app_state;
mod error;
mod room;
mod session;
mod signaling;

pub use app_state::*;
pub use error::*;
pub use room::*;
pub use session::*;
pub use signaling::*;
