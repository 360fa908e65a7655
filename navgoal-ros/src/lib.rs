//! [`navgoal`] implementation using ROS1.

#![warn(rust_2018_idioms)]

mod error;
#[allow(dead_code, missing_debug_implementations, unreachable_pub)]
mod msg;
mod msg_utils;
mod ros_action_client;
mod ros_session;
pub mod rosrust_utils;

pub use crate::{error::Error, ros_action_client::*, ros_session::*};
