mod notification;
mod session_coordinator;

pub use notification::*;
pub use session_coordinator::*;
