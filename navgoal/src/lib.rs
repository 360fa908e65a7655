//! Send a single navigation goal to an action server and wait for the result.

mod clients;
mod error;
mod goal;
mod sender;
mod status;
mod traits;

pub use clients::*;
pub use error::*;
pub use goal::*;
pub use sender::*;
pub use status::*;
pub use traits::*;

// re-export
pub use nalgebra::{Isometry3, UnitQuaternion};
