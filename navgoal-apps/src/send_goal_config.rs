use std::path::Path;

use navgoal::GoalSenderConfig;
#[cfg(feature = "ros")]
use navgoal_ros::RosSessionConfig;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Contents of the optional configuration file of `send_goal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendGoalConfig {
    /// Append a random suffix to the node name so that several instances can
    /// run at the same time.
    #[serde(default = "default_anonymous")]
    pub anonymous: bool,
    #[serde(default)]
    pub sender: GoalSenderConfig,
    #[cfg(feature = "ros")]
    #[serde(default)]
    pub ros: RosSessionConfig,
}

fn default_anonymous() -> bool {
    true
}

impl Default for SendGoalConfig {
    fn default() -> Self {
        Self {
            anonymous: default_anonymous(),
            sender: GoalSenderConfig::default(),
            #[cfg(feature = "ros")]
            ros: RosSessionConfig::default(),
        }
    }
}

impl SendGoalConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        Self::from_str(
            &std::fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_owned(), e))?,
            path,
        )
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))
    }
}
