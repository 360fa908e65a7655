use std::sync::Mutex;

use navgoal::{ActionClient, Session, Time};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{msg_utils::from_ros_time, Error, RosActionClient};

// rosrust keeps one node per process.
static INITIALIZED: Mutex<bool> = Mutex::new(false);

/// Configuration for `RosSession`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosSessionConfig {
    /// Queue size of the action topics.
    #[serde(default = "default_queue_size")]
    pub queue_size: usize,
    /// Polling rate in Hz while waiting for the server or a result.
    #[serde(default = "default_monitoring_rate")]
    pub monitoring_rate: f64,
}

fn default_queue_size() -> usize {
    1
}

fn default_monitoring_rate() -> f64 {
    10.0
}

impl Default for RosSessionConfig {
    fn default() -> Self {
        Self {
            queue_size: default_queue_size(),
            monitoring_rate: default_monitoring_rate(),
        }
    }
}

/// `navgoal::Session` backed by a rosrust node.
#[derive(Debug, Clone, Default)]
pub struct RosSession {
    config: RosSessionConfig,
}

impl RosSession {
    pub fn new(config: RosSessionConfig) -> Self {
        Self { config }
    }
}

impl Session for RosSession {
    fn init(&self, node_name: &str) -> navgoal::Result<()> {
        let mut initialized = INITIALIZED
            .lock()
            .map_err(|_| Error::BufferLock("ros session state".to_owned()))?;
        if *initialized {
            debug!("ros is already initialized");
            return Ok(());
        }
        rosrust::try_init(node_name).map_err(|e| Error::ros(format!("init {node_name}"), e))?;
        *initialized = true;
        info!("initialized ros node {}", rosrust::name());
        Ok(())
    }

    /// Current ROS time. Only meaningful after [`Session::init`].
    fn now(&self) -> Time {
        from_ros_time(rosrust::now())
    }

    fn action_client(&self, action_name: &str) -> navgoal::Result<Box<dyn ActionClient>> {
        let client = RosActionClient::new(
            action_name,
            self.config.queue_size,
            self.config.monitoring_rate,
        )?;
        Ok(Box::new(client))
    }
}
