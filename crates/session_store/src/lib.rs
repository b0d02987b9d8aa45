mod error;
mod paths;
mod schema;
mod store;

pub use error::{InvalidDay, SessionStoreError};
pub use paths::{default_session_path, SESSION_STATE_FILE};
pub use schema::{Day, SessionRecord};
pub use store::{local_now, SessionStore};
