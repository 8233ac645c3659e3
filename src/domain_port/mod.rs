// store

mod credential_store;
mod response_cache;

pub use credential_store::*;
pub use response_cache::*;

// collaborators

mod session_observer;
mod transport;

pub use session_observer::*;
pub use transport::*;
