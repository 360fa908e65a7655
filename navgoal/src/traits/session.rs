use auto_impl::auto_impl;

use crate::{error::Result, goal::Time, traits::ActionClient};

/// Connection of this process to the robot middleware.
#[auto_impl(&, Box, Arc)]
pub trait Session: Send + Sync {
    /// Starts the session. Calling this more than once is a no-op.
    fn init(&self, node_name: &str) -> Result<()>;

    fn now(&self) -> Time;

    fn action_client(&self, action_name: &str) -> Result<Box<dyn ActionClient>>;
}
