use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::{Dispatcher, MemoryLedger, Outcome, Publisher, Result, SeenStore, decode};

/// Entry point the transport layer calls with each deserialized request body.
///
/// Owns the dispatcher and, through it, the dedup ledger. Construct one per
/// process and share it across request handlers.
///
/// ```ignore
/// let ingress = Arc::new(Ingress::new(Arc::new(bus_publisher)));
/// // per request:
/// match ingress.accept(&body).await {
///     Ok(_) => { /* 2xx; duplicates and first-timers look the same */ }
///     Err(e) if e.is_client_error() => { /* 400 with e.to_string() */ }
///     Err(_) => { /* 500 */ }
/// }
/// ```
pub struct Ingress<P: Publisher, S: SeenStore = MemoryLedger> {
    dispatcher: Dispatcher<P, S>,
}

impl<P: Publisher> Ingress<P, MemoryLedger> {
    pub fn new(publisher: Arc<P>) -> Self {
        Self {
            dispatcher: Dispatcher::new(publisher),
        }
    }
}

impl<P: Publisher, S: SeenStore> Ingress<P, S> {
    pub fn with_ledger(publisher: Arc<P>, ledger: Arc<S>) -> Self {
        Self {
            dispatcher: Dispatcher::with_ledger(publisher, ledger),
        }
    }

    /// Validate and dispatch one submitted message.
    ///
    /// Rejections are client errors and emit nothing; accepted messages emit
    /// at most one event, duplicates none.
    pub async fn accept(&self, body: &Value) -> Result<Outcome> {
        let message = match decode(body) {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "rejected message");
                return Err(e);
            }
        };
        self.dispatcher.dispatch(&message).await
    }
}
