use navgoal::{GoalStatus, PoseStamped, Time};

use crate::msg::{actionlib_msgs, geometry_msgs, std_msgs};

pub(crate) fn to_ros_time(time: Time) -> rosrust::Time {
    rosrust::Time {
        sec: time.sec,
        nsec: time.nsec,
    }
}

pub(crate) fn from_ros_time(time: rosrust::Time) -> Time {
    Time::new(time.sec, time.nsec)
}

impl From<&PoseStamped> for geometry_msgs::PoseStamped {
    fn from(goal: &PoseStamped) -> Self {
        let translation = &goal.pose.translation;
        let rotation = &goal.pose.rotation;
        Self {
            header: std_msgs::Header {
                seq: 0,
                stamp: to_ros_time(goal.header.stamp),
                frame_id: goal.header.frame_id.clone(),
            },
            pose: geometry_msgs::Pose {
                position: geometry_msgs::Point {
                    x: translation.x,
                    y: translation.y,
                    z: translation.z,
                },
                orientation: geometry_msgs::Quaternion {
                    x: rotation.i,
                    y: rotation.j,
                    z: rotation.k,
                    w: rotation.w,
                },
            },
        }
    }
}

impl From<&actionlib_msgs::GoalStatus> for GoalStatus {
    fn from(status: &actionlib_msgs::GoalStatus) -> Self {
        GoalStatus::from_code(status.status)
    }
}
