use std::process::ExitCode;

use navgoal_apps::{execute, utils::init_tracing};
use navgoal_ros::RosSession;

fn main() -> ExitCode {
    init_tracing();
    ExitCode::from(execute(std::env::args_os(), |config| {
        RosSession::new(config.ros.clone())
    }))
}
