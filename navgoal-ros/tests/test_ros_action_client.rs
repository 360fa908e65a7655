#![cfg(target_os = "linux")]

mod msg {
    rosrust::rosmsg_include!(
        actionlib_msgs / GoalID,
        actionlib_msgs / GoalStatusArray,
        move_base_msgs / MoveBaseActionGoal,
        move_base_msgs / MoveBaseActionResult
    );
}
mod util;

use std::{
    f64::consts::FRAC_1_SQRT_2,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use assert_approx_eq::assert_approx_eq;
use navgoal::{ActionClient, GoalHandle, GoalRequest, GoalStatus, Session};
use navgoal_ros::RosSession;
use util::{run_roscore, subscribe_with_channel, wait_for_subscriber};

use crate::msg::{actionlib_msgs, move_base_msgs};

const MOVE_BASE_ACTION: &str = "/move_base";
const RECEIVE_TIMEOUT: Duration = Duration::from_secs(5);

/// Stands in for the `move_base` action server on the wire.
struct FakeMoveBase {
    goal_rx: flume::Receiver<move_base_msgs::MoveBaseActionGoal>,
    cancel_rx: flume::Receiver<actionlib_msgs::GoalID>,
    result_publisher: rosrust::Publisher<move_base_msgs::MoveBaseActionResult>,
    _goal_subscriber: rosrust::Subscriber,
    _cancel_subscriber: rosrust::Subscriber,
}

impl FakeMoveBase {
    fn new(action_name: &str) -> Self {
        let (goal_rx, _goal_subscriber) = subscribe_with_channel(&format!("{action_name}/goal"), 10);
        let (cancel_rx, _cancel_subscriber) =
            subscribe_with_channel(&format!("{action_name}/cancel"), 10);
        let result_publisher = rosrust::publish(&format!("{action_name}/result"), 10).unwrap();
        Self {
            goal_rx,
            cancel_rx,
            result_publisher,
            _goal_subscriber,
            _cancel_subscriber,
        }
    }

    /// Publishes an empty status array at 10 Hz until `running` is cleared.
    fn publish_status(action_name: &str, running: Arc<AtomicBool>) -> thread::JoinHandle<()> {
        let status_publisher =
            rosrust::publish::<actionlib_msgs::GoalStatusArray>(&format!("{action_name}/status"), 1)
                .unwrap();
        thread::spawn(move || {
            while running.load(Ordering::Relaxed) && rosrust::is_ok() {
                status_publisher.send(Default::default()).unwrap();
                thread::sleep(Duration::from_millis(100));
            }
        })
    }

    fn publish_result(&self, goal_id: &str, status: u8) {
        let mut result = move_base_msgs::MoveBaseActionResult::default();
        result.status.goal_id.id = goal_id.to_owned();
        result.status.status = status;
        self.result_publisher.send(result).unwrap();
        // Let the client handle it before the next one arrives.
        thread::sleep(Duration::from_millis(300));
    }
}

#[test]
fn test_ros_action_client() {
    let _roscore = run_roscore();
    // rosrust can be initialized only once per process, so every case runs from here.
    let session = RosSession::default();
    session.init("navgoal_ros_action_client_test").unwrap();

    test_server_not_available(&session);
    test_goal_result_and_cancel(&session);
}

fn test_server_not_available(session: &RosSession) {
    let client = session.action_client("/no_server").unwrap();
    assert!(!client
        .wait_for_server(Duration::from_millis(300))
        .unwrap());
}

fn test_goal_result_and_cancel(session: &RosSession) {
    let server = FakeMoveBase::new(MOVE_BASE_ACTION);
    let client = session.action_client(MOVE_BASE_ACTION).unwrap();

    // Subscribed to goal and cancel, but no status yet.
    assert!(!client
        .wait_for_server(Duration::from_millis(500))
        .unwrap());

    let running = Arc::new(AtomicBool::new(true));
    let status_thread = FakeMoveBase::publish_status(MOVE_BASE_ACTION, running.clone());
    assert!(client.wait_for_server(Duration::from_secs(10)).unwrap());

    let request = GoalRequest::new(1.0, 2.0, 90.0).with_frame("odom");
    let handle = client.submit(request.target_pose(session.now())).unwrap();
    assert!(
        handle.id.starts_with(&format!("{}-1-", rosrust::name())),
        "{}",
        handle.id
    );
    let stamp = handle.id.rsplit('-').next().unwrap();
    let (sec, nsec) = stamp.split_once('.').unwrap();
    assert!(sec.parse::<u32>().is_ok());
    assert_eq!(nsec.len(), 9);

    let goal = server.goal_rx.recv_timeout(RECEIVE_TIMEOUT).unwrap();
    assert_eq!(goal.goal_id.id, handle.id);
    let target = &goal.goal.target_pose;
    assert_eq!(target.header.frame_id, "odom");
    assert_approx_eq!(target.pose.position.x, 1.0);
    assert_approx_eq!(target.pose.position.y, 2.0);
    assert_approx_eq!(target.pose.position.z, 0.0);
    assert_approx_eq!(target.pose.orientation.z, FRAC_1_SQRT_2);
    assert_approx_eq!(target.pose.orientation.w, FRAC_1_SQRT_2);

    // A result of another goal arriving right after ours must not hide it.
    wait_for_subscriber(&server.result_publisher);
    server.publish_result(&handle.id, actionlib_msgs::GoalStatus::SUCCEEDED);
    server.publish_result("other-goal", actionlib_msgs::GoalStatus::ABORTED);
    assert_eq!(
        client.await_terminal(&handle, RECEIVE_TIMEOUT).unwrap(),
        Some(GoalStatus::Succeeded)
    );

    // Results that are not terminal or belong to another goal are ignored.
    let handle = client.submit(request.target_pose(session.now())).unwrap();
    assert!(handle.id.starts_with(&format!("{}-2-", rosrust::name())));
    server.goal_rx.recv_timeout(RECEIVE_TIMEOUT).unwrap();
    server.publish_result(&handle.id, actionlib_msgs::GoalStatus::ACTIVE);
    server.publish_result("other-goal", actionlib_msgs::GoalStatus::SUCCEEDED);
    assert_eq!(
        client
            .await_terminal(&handle, Duration::from_millis(500))
            .unwrap(),
        None
    );

    client.cancel(&handle).unwrap();
    let canceled = server.cancel_rx.recv_timeout(RECEIVE_TIMEOUT).unwrap();
    assert_eq!(canceled.id, handle.id);

    // An unknown handle never finishes.
    assert_eq!(
        client
            .await_terminal(&GoalHandle::new("unknown"), Duration::from_millis(300))
            .unwrap(),
        None
    );

    running.store(false, Ordering::Relaxed);
    status_thread.join().unwrap();
}
