use std::process::{Child, Command, Stdio};

use nix::{
    sys::signal::{kill, Signal},
    unistd::Pid,
};

/// Interrupts the child process when dropped.
#[must_use]
#[derive(Debug)]
pub(crate) struct ChildProcessTerminator(pub(crate) Child);

impl ChildProcessTerminator {
    #[track_caller]
    pub(crate) fn spawn(command: &mut Command) -> ChildProcessTerminator {
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        ChildProcessTerminator(command.spawn().unwrap())
    }
}

impl Drop for ChildProcessTerminator {
    fn drop(&mut self) {
        let pid = Pid::from_raw(self.0.id() as i32);
        kill(pid, Signal::SIGINT).unwrap();
    }
}
