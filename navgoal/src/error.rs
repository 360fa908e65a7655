use std::time::Duration;

use thiserror::Error;

use crate::GoalStatus;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("navgoal: Invalid goal request : {}", .0)]
    InvalidRequest(String),
    #[error("navgoal: {} server not available within {:?}", action_name, timeout)]
    ServerUnavailable {
        action_name: String,
        timeout: Duration,
    },
    #[error("navgoal: Timeout {:?} waiting for a terminal status", timeout)]
    GoalTimeout { timeout: Duration },
    #[error("navgoal: Goal did not succeed, state={}", .0)]
    GoalNotSucceeded(GoalStatus),
    #[error("navgoal: Connection error : {}", message)]
    Connection { message: String },
    #[error("navgoal: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
