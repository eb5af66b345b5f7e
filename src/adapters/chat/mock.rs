//! Mock messenger for testing.
//!
//! Records every delivered message so tests can assert on what the user
//! would have seen. Can be configured to fail deliveries.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::ports::{DeliveryError, Messenger, OutboundMessage};

/// Messenger that records deliveries instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct MockMessenger {
    deliveries: Arc<Mutex<Vec<OutboundMessage>>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next delivery fail with a transport error.
    pub fn fail_next_delivery(&self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// All recorded deliveries, in order.
    pub fn deliveries(&self) -> Vec<OutboundMessage> {
        self.deliveries.lock().unwrap().clone()
    }

    /// The last recorded delivery.
    pub fn last_delivery(&self) -> Option<OutboundMessage> {
        self.deliveries.lock().unwrap().last().cloned()
    }

    /// Number of deliveries recorded.
    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }

    /// Concatenated text of every delivered message, for convenience.
    pub fn all_text(&self) -> String {
        self.deliveries
            .lock()
            .unwrap()
            .iter()
            .filter_map(|m| m.text.clone())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn deliver(&self, message: OutboundMessage) -> Result<(), DeliveryError> {
        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(DeliveryError::transport("mock delivery failure"));
        }
        drop(fail);

        self.deliveries.lock().unwrap().push(message);
        Ok(())
    }
}
