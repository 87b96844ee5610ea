//! Test doubles for the [`Publisher`] port.
//!
//! Used by this crate's own tests and available to downstream crates that
//! want to assert on emitted events without a real bus.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Error, Publisher, Result, RocketEvent};

/// [`Publisher`] that records every published event for later assertions.
#[derive(Debug, Default, Clone)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<RocketEvent>>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events published so far, in publish order.
    pub async fn events(&self) -> Vec<RocketEvent> {
        self.events.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.lock().await.is_empty()
    }
}

impl Publisher for RecordingPublisher {
    async fn publish(&self, event: RocketEvent) -> Result {
        self.events.lock().await.push(event);
        Ok(())
    }
}

/// [`Publisher`] that always fails, for exercising the downstream-error path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingPublisher;

impl Publisher for FailingPublisher {
    async fn publish(&self, _event: RocketEvent) -> Result {
        Err(Error::publish("bus unavailable"))
    }
}
