mod portal_client;
mod refresh_gate;
mod session_observer_log;
mod transport_fake;

pub use portal_client::*;
pub use refresh_gate::*;
pub use session_observer_log::*;
pub use transport_fake::*;
