mod comment;
mod credential;
mod exchange;
mod feedback;
mod issue;
mod report;
mod user;

pub use comment::*;
pub use credential::*;
pub use exchange::*;
pub use feedback::*;
pub use issue::*;
pub use report::*;
pub use user::*;
