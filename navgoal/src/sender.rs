use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::{
    error::{Error, Result},
    goal::GoalRequest,
    traits::{ActionClient, GoalHandle, Session},
};

pub const DEFAULT_NODE_NAME: &str = "send_move_base_goal";
pub const DEFAULT_ACTION_NAME: &str = "move_base";
pub const DEFAULT_SERVER_TIMEOUT_SEC: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalSenderConfig {
    #[serde(default = "default_node_name")]
    pub node_name: String,
    /// Name of the navigation action, e.g. `move_base`.
    #[serde(default = "default_action_name")]
    pub action_name: String,
    /// How long to wait for the action server to come up.
    #[serde(default = "default_server_timeout_sec")]
    pub server_timeout_sec: f64,
}

fn default_node_name() -> String {
    DEFAULT_NODE_NAME.to_owned()
}

fn default_action_name() -> String {
    DEFAULT_ACTION_NAME.to_owned()
}

fn default_server_timeout_sec() -> f64 {
    DEFAULT_SERVER_TIMEOUT_SEC
}

impl Default for GoalSenderConfig {
    fn default() -> Self {
        Self {
            node_name: default_node_name(),
            action_name: default_action_name(),
            server_timeout_sec: default_server_timeout_sec(),
        }
    }
}

/// Sends one goal per call and blocks until it finishes.
#[derive(Debug, Clone, Default)]
pub struct GoalSender {
    config: GoalSenderConfig,
}

impl GoalSender {
    pub fn new(config: GoalSenderConfig) -> Self {
        Self { config }
    }

    /// Returns `true` only if the goal was reached. Every failure is logged.
    pub fn send_goal<S>(&self, session: &S, request: &GoalRequest) -> bool
    where
        S: Session + ?Sized,
    {
        match self.try_send_goal(session, request) {
            Ok(()) => {
                info!("goal reached");
                true
            }
            Err(Error::GoalTimeout { .. }) => false,
            Err(Error::GoalNotSucceeded(status)) => {
                warn!("goal failed. state={status}");
                false
            }
            Err(Error::ServerUnavailable { action_name, .. }) => {
                error!("{action_name} server not available");
                false
            }
            Err(e) => {
                error!("{e}");
                false
            }
        }
    }

    /// Same as [`GoalSender::send_goal`] but reports why the goal was not
    /// reached. A timed out goal is logged and canceled before this returns.
    pub fn try_send_goal<S>(&self, session: &S, request: &GoalRequest) -> Result<()>
    where
        S: Session + ?Sized,
    {
        request.validate()?;
        let server_timeout = self.server_timeout()?;

        session.init(&self.config.node_name)?;
        let client = session.action_client(&self.config.action_name)?;

        info!("waiting for {} action server...", self.config.action_name);
        if !client.wait_for_server(server_timeout)? {
            return Err(Error::ServerUnavailable {
                action_name: self.config.action_name.clone(),
                timeout: server_timeout,
            });
        }

        let goal = request.target_pose(session.now());
        debug!("goal: {goal:?}");
        info!(
            "sending goal: x={:.3} y={:.3} yaw={:.1}° frame={}",
            request.x, request.y, request.yaw_degrees, request.frame
        );
        let handle = client.submit(goal)?;

        match client.await_terminal(&handle, request.timeout)? {
            None => {
                warn!(
                    "timeout {:.1}s. canceling goal.",
                    request.timeout.as_secs_f64()
                );
                cancel_goal(&*client, &handle);
                Err(Error::GoalTimeout {
                    timeout: request.timeout,
                })
            }
            Some(status) if status.is_succeeded() => Ok(()),
            Some(status) => Err(Error::GoalNotSucceeded(status)),
        }
    }

    fn server_timeout(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.config.server_timeout_sec).map_err(|e| {
            Error::InvalidRequest(format!(
                "server_timeout_sec {} is not usable ({e})",
                self.config.server_timeout_sec
            ))
        })
    }
}

fn cancel_goal(client: &dyn ActionClient, handle: &GoalHandle) {
    if let Err(e) = client.cancel(handle) {
        error!("failed to cancel goal {}: {e}", handle.id);
    }
}

/// Sends a goal with the default [`GoalSenderConfig`].
pub fn send_goal<S>(
    session: &S,
    x: f64,
    y: f64,
    yaw_degrees: f64,
    frame: &str,
    timeout: Duration,
) -> bool
where
    S: Session + ?Sized,
{
    let request = GoalRequest::new(x, y, yaw_degrees)
        .with_frame(frame)
        .with_timeout(timeout);
    GoalSender::default().send_goal(session, &request)
}
