use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, MutexGuard,
    },
    time::{Duration, Instant},
};

use navgoal::{ActionClient, GoalHandle, GoalStatus, PoseStamped};
use tracing::{debug, info};

use crate::{
    msg::{actionlib_msgs, move_base_msgs, std_msgs},
    msg_utils::to_ros_time,
    rosrust_utils::SubscriberHandler,
    Error,
};

/// Terminal statuses of the goals sent by this client, keyed by goal id.
/// `None` until the result arrives.
type GoalResults = Arc<Mutex<HashMap<String, Option<GoalStatus>>>>;

/// `navgoal::ActionClient` implementation for a ROS1 `move_base` action.
///
/// Speaks the actionlib topic protocol directly: goals and cancel requests
/// are published on `<action>/goal` and `<action>/cancel`, and the server is
/// observed through `<action>/status` and `<action>/result`.
pub struct RosActionClient {
    action_name: String,
    goal_publisher: rosrust::Publisher<move_base_msgs::MoveBaseActionGoal>,
    cancel_publisher: rosrust::Publisher<actionlib_msgs::GoalID>,
    status_subscriber: SubscriberHandler<actionlib_msgs::GoalStatusArray>,
    results: GoalResults,
    _result_subscriber: rosrust::Subscriber,
    monitoring_rate: f64,
    goal_count: AtomicU64,
}

impl RosActionClient {
    pub fn new(action_name: &str, queue_size: usize, monitoring_rate: f64) -> Result<Self, Error> {
        let goal_topic = format!("{action_name}/goal");
        let cancel_topic = format!("{action_name}/cancel");
        let goal_publisher = rosrust::publish(&goal_topic, queue_size)
            .map_err(|e| Error::ros(format!("publish {goal_topic}"), e))?;
        let cancel_publisher = rosrust::publish(&cancel_topic, queue_size)
            .map_err(|e| Error::ros(format!("publish {cancel_topic}"), e))?;
        let status_subscriber =
            SubscriberHandler::new(&format!("{action_name}/status"), queue_size)?;
        let results = GoalResults::default();
        let _result_subscriber =
            subscribe_results(&format!("{action_name}/result"), queue_size, results.clone())?;
        Ok(Self {
            action_name: action_name.to_owned(),
            goal_publisher,
            cancel_publisher,
            status_subscriber,
            results,
            _result_subscriber,
            monitoring_rate,
            goal_count: AtomicU64::new(0),
        })
    }

    fn is_server_connected(&self) -> Result<bool, Error> {
        Ok(self.status_subscriber.has_message()?
            && self.goal_publisher.subscriber_count() > 0
            && self.cancel_publisher.subscriber_count() > 0)
    }

    fn next_goal_id(&self, stamp: rosrust::Time) -> String {
        let count = self.goal_count.fetch_add(1, Ordering::Relaxed) + 1;
        format!(
            "{}-{}-{}.{:09}",
            rosrust::name(),
            count,
            stamp.sec,
            stamp.nsec
        )
    }

    fn lock_results(&self) -> Result<MutexGuard<'_, HashMap<String, Option<GoalStatus>>>, Error> {
        self.results
            .lock()
            .map_err(|_| Error::BufferLock(format!("{}/result", self.action_name)))
    }

    /// Takes the terminal status of `goal_id` once its result has arrived.
    fn take_status(&self, goal_id: &str) -> Result<Option<GoalStatus>, Error> {
        let mut results = self.lock_results()?;
        match results.get(goal_id) {
            Some(Some(status)) => {
                let status = *status;
                results.remove(goal_id);
                Ok(Some(status))
            }
            _ => Ok(None),
        }
    }
}

/// Records every terminal result whose goal id was registered in `results`.
/// Results of other clients' goals are dropped.
fn subscribe_results(
    topic: &str,
    queue_size: usize,
    results: GoalResults,
) -> Result<rosrust::Subscriber, Error> {
    let callback_topic = topic.to_owned();
    rosrust::subscribe(
        topic,
        queue_size,
        move |result: move_base_msgs::MoveBaseActionResult| {
            let status = GoalStatus::from(&result.status);
            if !status.is_terminal() {
                return;
            }
            match results.lock() {
                Ok(mut results) => {
                    if let Some(slot) = results.get_mut(&result.status.goal_id.id) {
                        debug!("result of {}: {status}", result.status.goal_id.id);
                        slot.replace(status);
                    }
                }
                Err(_) => debug!("dropped a message on {callback_topic}: buffer is poisoned"),
            }
        },
    )
    .map_err(|e| Error::ros(format!("subscribe {topic}"), e))
}

impl std::fmt::Debug for RosActionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosActionClient")
            .field("action_name", &self.action_name)
            .field("monitoring_rate", &self.monitoring_rate)
            .finish_non_exhaustive()
    }
}

impl ActionClient for RosActionClient {
    fn wait_for_server(&self, timeout: Duration) -> navgoal::Result<bool> {
        let rate = rosrust::rate(self.monitoring_rate);
        let start_time = Instant::now();
        while rosrust::is_ok() {
            if self.is_server_connected()? {
                info!("connected to {}", self.action_name);
                return Ok(true);
            }
            if start_time.elapsed() >= timeout {
                break;
            }
            rate.sleep();
        }
        Ok(false)
    }

    fn submit(&self, goal: PoseStamped) -> navgoal::Result<GoalHandle> {
        let now = rosrust::now();
        let id = self.next_goal_id(now);
        let action_goal = move_base_msgs::MoveBaseActionGoal {
            header: std_msgs::Header {
                stamp: now,
                ..Default::default()
            },
            goal_id: actionlib_msgs::GoalID {
                stamp: now,
                id: id.clone(),
            },
            goal: move_base_msgs::MoveBaseGoal {
                target_pose: (&goal).into(),
            },
        };
        self.lock_results()?.insert(id.clone(), None);
        debug!("publishing goal {id} on {}", self.action_name);
        self.goal_publisher
            .send(action_goal)
            .map_err(|_| Error::ActionGoalSendingFailure(self.action_name.clone()))?;
        Ok(GoalHandle::new(id))
    }

    fn await_terminal(
        &self,
        handle: &GoalHandle,
        timeout: Duration,
    ) -> navgoal::Result<Option<GoalStatus>> {
        let rate = rosrust::rate(self.monitoring_rate);
        let start_time = Instant::now();
        while rosrust::is_ok() && start_time.elapsed() < timeout {
            if let Some(status) = self.take_status(&handle.id)? {
                return Ok(Some(status));
            }
            rate.sleep();
        }
        Ok(None)
    }

    fn cancel(&self, handle: &GoalHandle) -> navgoal::Result<()> {
        let goal_id = actionlib_msgs::GoalID {
            stamp: to_ros_time(Default::default()),
            id: handle.id.clone(),
        };
        self.cancel_publisher
            .send(goal_id)
            .map_err(|_| Error::ActionCancelSendingFailure(self.action_name.clone()))?;
        info!("requested to cancel {}", handle.id);
        Ok(())
    }
}
