use std::path::Path;

// The vendored message definitions let rosmsg_include! work without a ROS installation.
fn main() {
    let msg_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("ros_msgs");
    println!("cargo:rerun-if-changed={}", msg_path.display());
    println!("cargo:rustc-env=ROSRUST_MSG_PATH={}", msg_path.display());
}
