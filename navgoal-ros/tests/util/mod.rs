use std::{env, process::Command, thread::sleep, time::Duration};

pub(crate) use child_process_terminator::ChildProcessTerminator;

mod child_process_terminator;

fn rostopic_listing_succeeds() -> bool {
    Command::new("rostopic")
        .arg("list")
        .output()
        .unwrap()
        .status
        .success()
}

/// Starts `roscore` on a free port and points `ROS_MASTER_URI` at it.
///
/// Keep the returned value alive while the test talks to the master.
pub(crate) fn run_roscore() -> ChildProcessTerminator {
    let port = portpicker::pick_unused_port().expect("No ports free");
    println!("Running roscore on port: {port}");
    env::set_var("ROS_MASTER_URI", format!("http://localhost:{port}"));
    let roscore =
        ChildProcessTerminator::spawn(Command::new("roscore").arg("-p").arg(format!("{port}")));
    while !rostopic_listing_succeeds() {
        sleep(Duration::from_millis(100));
    }
    roscore
}

/// Subscribes to `topic` and forwards every message to the returned channel.
pub(crate) fn subscribe_with_channel<T: rosrust::Message>(
    topic: &str,
    queue_size: usize,
) -> (flume::Receiver<T>, rosrust::Subscriber) {
    let (tx, rx) = flume::unbounded();
    let subscriber = rosrust::subscribe(topic, queue_size, move |message: T| {
        tx.send(message).unwrap();
    })
    .unwrap();
    (rx, subscriber)
}

/// Blocks until `publisher` is connected to at least one subscriber.
pub(crate) fn wait_for_subscriber<T: rosrust::Message>(publisher: &rosrust::Publisher<T>) {
    for _ in 0..100 {
        if publisher.subscriber_count() > 0 {
            return;
        }
        sleep(Duration::from_millis(100));
    }
    panic!("no subscriber connected");
}
