use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
    time::Duration,
};

use crate::{
    error::{Error, Result},
    goal::PoseStamped,
    status::GoalStatus,
    traits::{ActionClient, GoalHandle},
};

/// Dummy ActionClient for debug or tests.
///
/// Every call is recorded. `reply` is returned by
/// [`ActionClient::await_terminal`] for every goal; `None` simulates a server
/// that never finishes the goal.
#[derive(Debug)]
pub struct DummyActionClient {
    pub available: bool,
    pub reply: Option<GoalStatus>,
    wait_for_server_count: AtomicUsize,
    submitted_goals: Mutex<Vec<PoseStamped>>,
    awaited_timeouts: Mutex<Vec<Duration>>,
    canceled_goals: Mutex<Vec<GoalHandle>>,
}

impl DummyActionClient {
    pub fn new(available: bool, reply: Option<GoalStatus>) -> Self {
        Self {
            available,
            reply,
            wait_for_server_count: AtomicUsize::new(0),
            submitted_goals: Mutex::new(Vec::new()),
            awaited_timeouts: Mutex::new(Vec::new()),
            canceled_goals: Mutex::new(Vec::new()),
        }
    }

    /// A reachable server which finishes every goal with `status`.
    pub fn replying(status: GoalStatus) -> Self {
        Self::new(true, Some(status))
    }

    pub fn unavailable() -> Self {
        Self::new(false, None)
    }

    /// A reachable server which never finishes a goal.
    pub fn never_finishing() -> Self {
        Self::new(true, None)
    }

    pub fn wait_for_server_count(&self) -> usize {
        self.wait_for_server_count.load(Ordering::Relaxed)
    }

    pub fn submitted_goals(&self) -> Vec<PoseStamped> {
        self.submitted_goals.lock().unwrap().clone()
    }

    pub fn awaited_timeouts(&self) -> Vec<Duration> {
        self.awaited_timeouts.lock().unwrap().clone()
    }

    pub fn canceled_goals(&self) -> Vec<GoalHandle> {
        self.canceled_goals.lock().unwrap().clone()
    }

    /// Number of calls of any method.
    pub fn call_count(&self) -> usize {
        self.wait_for_server_count()
            + self.submitted_goals.lock().unwrap().len()
            + self.awaited_timeouts.lock().unwrap().len()
            + self.canceled_goals.lock().unwrap().len()
    }
}

impl Default for DummyActionClient {
    fn default() -> Self {
        Self::replying(GoalStatus::Succeeded)
    }
}

impl ActionClient for DummyActionClient {
    fn wait_for_server(&self, _timeout: Duration) -> Result<bool> {
        self.wait_for_server_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.available)
    }

    fn submit(&self, goal: PoseStamped) -> Result<GoalHandle> {
        if !self.available {
            return Err(Error::Connection {
                message: "dummy server is not available".to_owned(),
            });
        }
        let mut goals = self.submitted_goals.lock().unwrap();
        goals.push(goal);
        Ok(GoalHandle::new(format!("dummy-{}", goals.len())))
    }

    fn await_terminal(
        &self,
        _handle: &GoalHandle,
        timeout: Duration,
    ) -> Result<Option<GoalStatus>> {
        self.awaited_timeouts.lock().unwrap().push(timeout);
        Ok(self.reply)
    }

    fn cancel(&self, handle: &GoalHandle) -> Result<()> {
        self.canceled_goals.lock().unwrap().push(handle.clone());
        Ok(())
    }
}
