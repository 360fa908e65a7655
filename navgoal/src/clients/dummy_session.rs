use std::sync::{Arc, Mutex};

use crate::{
    clients::DummyActionClient,
    error::Result,
    goal::Time,
    traits::{ActionClient, Session},
};

/// Dummy Session for debug or tests.
///
/// Every [`Session::action_client`] call hands out the same shared
/// [`DummyActionClient`], so its records cover the whole session.
#[derive(Debug)]
pub struct DummySession {
    pub client: Arc<DummyActionClient>,
    pub stamp: Time,
    node_names: Mutex<Vec<String>>,
    action_names: Mutex<Vec<String>>,
}

impl DummySession {
    pub fn new(client: DummyActionClient) -> Self {
        Self {
            client: Arc::new(client),
            stamp: Time::default(),
            node_names: Mutex::new(Vec::new()),
            action_names: Mutex::new(Vec::new()),
        }
    }

    /// Node names passed to [`Session::init`], in call order.
    pub fn init_calls(&self) -> Vec<String> {
        self.node_names.lock().unwrap().clone()
    }

    /// Action names passed to [`Session::action_client`], in call order.
    pub fn requested_actions(&self) -> Vec<String> {
        self.action_names.lock().unwrap().clone()
    }
}

impl Default for DummySession {
    fn default() -> Self {
        Self::new(DummyActionClient::default())
    }
}

impl Session for DummySession {
    fn init(&self, node_name: &str) -> Result<()> {
        self.node_names.lock().unwrap().push(node_name.to_owned());
        Ok(())
    }

    fn now(&self) -> Time {
        self.stamp
    }

    fn action_client(&self, action_name: &str) -> Result<Box<dyn ActionClient>> {
        self.action_names
            .lock()
            .unwrap()
            .push(action_name.to_owned());
        Ok(Box::new(self.client.clone()))
    }
}
