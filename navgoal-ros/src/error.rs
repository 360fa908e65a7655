use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("navgoal-ros: Failed to publish goal on {}", .0)]
    ActionGoalSendingFailure(String),
    #[error("navgoal-ros: Failed to publish cancel request on {}", .0)]
    ActionCancelSendingFailure(String),
    #[error("navgoal-ros: rosrust: {} ({})", context, message)]
    Ros { context: String, message: String },
    #[error("navgoal-ros: Failed to lock buffer for {}", .0)]
    BufferLock(String),
    #[error("navgoal-ros: navgoal: {:?}", .0)]
    Navgoal(#[from] navgoal::Error),
    #[error("navgoal-ros: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn ros(context: impl Into<String>, e: impl std::fmt::Display) -> Self {
        Self::Ros {
            context: context.into(),
            message: e.to_string(),
        }
    }
}

impl From<Error> for navgoal::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Navgoal(e) => e,
            Error::Other(e) => navgoal::Error::Other(e),
            e => navgoal::Error::Connection {
                message: e.to_string(),
            },
        }
    }
}
