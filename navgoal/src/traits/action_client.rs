use std::time::Duration;

use auto_impl::auto_impl;

use crate::{error::Result, goal::PoseStamped, status::GoalStatus};

/// Identifier of a goal submitted through an [`ActionClient`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GoalHandle {
    pub id: String,
}

impl GoalHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Client side of a navigation action server.
#[auto_impl(&, Box, Arc)]
pub trait ActionClient: Send + Sync {
    /// Blocks until the server is reachable. Returns `false` if it is not
    /// reachable within `timeout`.
    fn wait_for_server(&self, timeout: Duration) -> Result<bool>;

    /// Submits the goal without waiting for it to finish.
    fn submit(&self, goal: PoseStamped) -> Result<GoalHandle>;

    /// Blocks until the goal reaches a terminal status. Returns `None` if no
    /// terminal status arrives within `timeout`.
    fn await_terminal(&self, handle: &GoalHandle, timeout: Duration)
        -> Result<Option<GoalStatus>>;

    fn cancel(&self, handle: &GoalHandle) -> Result<()>;
}
