mod action_client;
mod session;

pub use action_client::*;
pub use session::*;
