mod dummy_action_client;
mod dummy_session;

pub use dummy_action_client::*;
pub use dummy_session::*;
