use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::Error;

type MessageBuffer<T> = Arc<Mutex<Option<T>>>;

/// Keeps the latest message received on a topic.
pub struct SubscriberHandler<T> {
    topic: String,
    buffer: MessageBuffer<T>,
    _subscriber: rosrust::Subscriber,
}

impl<T> SubscriberHandler<T>
where
    T: rosrust::Message,
{
    pub fn new(topic: &str, queue_size: usize) -> Result<Self, Error> {
        let buffer: MessageBuffer<T> = Arc::new(Mutex::new(None));
        let buffer_for_callback = buffer.clone();
        let callback_topic = topic.to_owned();
        let _subscriber = rosrust::subscribe(topic, queue_size, move |message: T| {
            match buffer_for_callback.lock() {
                Ok(mut buffer) => {
                    buffer.replace(message);
                }
                Err(_) => debug!("dropped a message on {callback_topic}: buffer is poisoned"),
            }
        })
        .map_err(|e| Error::ros(format!("subscribe {topic}"), e))?;
        Ok(Self {
            topic: topic.to_owned(),
            buffer,
            _subscriber,
        })
    }

    pub fn has_message(&self) -> Result<bool, Error> {
        Ok(self
            .buffer
            .lock()
            .map_err(|_| Error::BufferLock(self.topic.clone()))?
            .is_some())
    }
}

impl<T> std::fmt::Debug for SubscriberHandler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberHandler")
            .field("topic", &self.topic)
            .finish_non_exhaustive()
    }
}
