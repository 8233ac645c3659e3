//! Typed wrappers over the authenticated client, one per portal resource.
//! All of them are pass-through: the server owns the payload shapes.

mod feedback;
mod issues;
mod listing;
mod profile;
mod reports;
mod support;
mod users;

pub use feedback::*;
pub use issues::*;
pub use listing::*;
pub use profile::*;
pub use reports::*;
pub use users::*;
