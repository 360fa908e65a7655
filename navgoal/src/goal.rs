use std::time::Duration;

use nalgebra::{Isometry3, Translation3, UnitQuaternion};

use crate::error::{Error, Result};

pub const DEFAULT_FRAME: &str = "map";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Timestamp in the middleware's clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    pub sec: u32,
    pub nsec: u32,
}

impl Time {
    pub fn new(sec: u32, nsec: u32) -> Self {
        Self { sec, nsec }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    pub frame_id: String,
    pub stamp: Time,
}

/// A pose expressed in a named frame at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseStamped {
    pub header: Header,
    pub pose: Isometry3<f64>,
}

/// Orientation for a planar heading: roll and pitch are zero.
pub fn yaw_to_quaternion(yaw_degrees: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_euler_angles(0.0, 0.0, yaw_degrees.to_radians())
}

/// A single navigation target.
#[derive(Clone, Debug, PartialEq)]
pub struct GoalRequest {
    pub x: f64,
    pub y: f64,
    pub yaw_degrees: f64,
    pub frame: String,
    pub timeout: Duration,
}

impl GoalRequest {
    pub fn new(x: f64, y: f64, yaw_degrees: f64) -> Self {
        Self {
            x,
            y,
            yaw_degrees,
            frame: DEFAULT_FRAME.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = frame.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a request from a timeout given in seconds, rejecting values
    /// that cannot be represented as a `Duration`.
    pub fn with_timeout_secs(self, timeout_sec: f64) -> Result<Self> {
        let timeout = Duration::try_from_secs_f64(timeout_sec).map_err(|e| {
            Error::InvalidRequest(format!("timeout {timeout_sec} is not usable ({e})"))
        })?;
        Ok(self.with_timeout(timeout))
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("x", self.x), ("y", self.y), ("yaw", self.yaw_degrees)] {
            if !value.is_finite() {
                return Err(Error::InvalidRequest(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidRequest("timeout must be positive".to_owned()));
        }
        Ok(())
    }

    pub fn orientation(&self) -> UnitQuaternion<f64> {
        yaw_to_quaternion(self.yaw_degrees)
    }

    pub fn target_pose(&self, stamp: Time) -> PoseStamped {
        PoseStamped {
            header: Header {
                frame_id: self.frame.clone(),
                stamp,
            },
            pose: Isometry3::from_parts(
                Translation3::new(self.x, self.y, 0.0),
                self.orientation(),
            ),
        }
    }
}
