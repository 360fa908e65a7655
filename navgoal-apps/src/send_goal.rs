use std::{ffi::OsString, path::PathBuf};

use clap::{error::ErrorKind, Parser};
use navgoal::{GoalRequest, GoalSender, Session, DEFAULT_FRAME};
use tracing::{debug, error};

use crate::{
    utils::{anonymize, resolve_config},
    SendGoalConfig,
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

const DEFAULT_TIMEOUT_SEC: f64 = 60.0;

pub const USAGE: &str =
    "usage: send_goal <x> <y> <yaw_deg> [frame] [timeout_sec] [--config-path <PATH>]";
pub const USAGE_EXAMPLE: &str = "example: send_goal 1.0 2.0 90 map 60";

/// Send a navigation goal to the move_base action server and wait for the result.
#[derive(Parser, Debug)]
#[command(name = "send_goal")]
pub struct SendGoalArgs {
    // Hyphen values so that floats like `-.5` or `-inf` are not taken for flags.
    /// Target x in meters.
    #[arg(allow_hyphen_values = true)]
    pub x: f64,
    /// Target y in meters.
    #[arg(allow_hyphen_values = true)]
    pub y: f64,
    /// Target heading in degrees.
    #[arg(allow_hyphen_values = true)]
    pub yaw_deg: f64,
    /// Frame of the target pose [default: map]
    pub frame: Option<String>,
    /// Seconds to wait for the goal to finish [default: 60]
    #[arg(allow_hyphen_values = true)]
    pub timeout_sec: Option<f64>,
    /// Path to the setting file.
    #[arg(short, long)]
    pub config_path: Option<PathBuf>,
    /// Arguments after the timeout are ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}

impl SendGoalArgs {
    pub fn goal_request(&self) -> Result<GoalRequest, navgoal::Error> {
        GoalRequest::new(self.x, self.y, self.yaw_deg)
            .with_frame(self.frame.as_deref().unwrap_or(DEFAULT_FRAME))
            .with_timeout_secs(self.timeout_sec.unwrap_or(DEFAULT_TIMEOUT_SEC))
    }
}

pub fn print_usage() {
    println!("{USAGE}");
    println!("{USAGE_EXAMPLE}");
}

/// Runs `send_goal` with the given command line and returns the exit code.
///
/// `make_session` is called only once the arguments and the config file are
/// known to be valid.
pub fn execute<I, T, S, F>(args: I, make_session: F) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: Session,
    F: FnOnce(&SendGoalConfig) -> S,
{
    let args = match SendGoalArgs::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return EXIT_SUCCESS;
        }
        Err(e) => {
            debug!("{e}");
            print_usage();
            return EXIT_FAILURE;
        }
    };
    debug!("args: {args:?}");
    if !args.extra.is_empty() {
        debug!("ignoring extra arguments: {:?}", args.extra);
    }

    let config = match resolve_config(args.config_path.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return EXIT_FAILURE;
        }
    };
    let request = match args.goal_request() {
        Ok(request) => request,
        Err(e) => {
            error!("{e}");
            return EXIT_FAILURE;
        }
    };

    let session = make_session(&config);
    if run(&config, &session, &request) {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}

/// Sends the goal and returns whether it was reached.
pub fn run<S>(config: &SendGoalConfig, session: &S, request: &GoalRequest) -> bool
where
    S: Session + ?Sized,
{
    let mut sender_config = config.sender.clone();
    if config.anonymous {
        sender_config.node_name = anonymize(&sender_config.node_name);
    }
    GoalSender::new(sender_config).send_goal(session, request)
}
