use std::sync::Arc;

use tracing::{debug, warn};

use crate::{MemoryLedger, Message, Publisher, Result, RocketEvent, SeenStore};

/// What happened to an accepted message.
///
/// Both variants are success from the transport's point of view; duplicates
/// are expected under at-least-once delivery and are absorbed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// First sighting of the (channel, sequence) pair; one event went out.
    Published,
    /// The pair had been seen before; nothing was emitted.
    Duplicate,
}

/// Deduplicates validated messages and emits at most one event per
/// (channel, sequence number) pair.
pub struct Dispatcher<P: Publisher, S: SeenStore = MemoryLedger> {
    ledger: Arc<S>,
    publisher: Arc<P>,
}

impl<P: Publisher> Dispatcher<P, MemoryLedger> {
    pub fn new(publisher: Arc<P>) -> Self {
        Self::with_ledger(publisher, Arc::new(MemoryLedger::new()))
    }
}

impl<P: Publisher, S: SeenStore> Dispatcher<P, S> {
    /// Construct with an externally owned ledger, e.g. to share it between
    /// dispatchers or to back it with something other than process memory.
    pub fn with_ledger(publisher: Arc<P>, ledger: Arc<S>) -> Self {
        Self { ledger, publisher }
    }

    /// Dispatch one validated message.
    ///
    /// The ledger records the pair before the publish future is awaited, so
    /// a concurrent duplicate arriving mid-publish is still suppressed. On
    /// publish failure the entry stays recorded: redelivery of the same pair
    /// dedups silently while the original failure surfaces to the caller.
    pub async fn dispatch(&self, message: &Message) -> Result<Outcome> {
        if !self.ledger.record(&message.channel, message.sequence) {
            debug!(
                channel = %message.channel,
                sequence = %message.sequence,
                "duplicate suppressed"
            );
            return Ok(Outcome::Duplicate);
        }

        let event = RocketEvent::from(message);
        if let Err(e) = self.publisher.publish(event).await {
            warn!(
                channel = %message.channel,
                sequence = %message.sequence,
                error = %e,
                "publish failed"
            );
            return Err(e);
        }
        Ok(Outcome::Published)
    }
}
