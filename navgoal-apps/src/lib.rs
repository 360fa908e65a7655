mod error;
mod send_goal;
mod send_goal_config;
pub mod utils;

pub use error::*;
pub use send_goal::*;
pub use send_goal_config::*;
