use std::future::Future;

use crate::{Result, RocketEvent};

/// Outbound port to the event bus.
///
/// Implementations wrap the actual transport. The core calls `publish` at
/// most once per accepted, non-duplicate message and never retries; delivery
/// guarantees past this point belong to the transport. A failed publish
/// surfaces to the caller as [`Error::Publish`](crate::Error::Publish).
///
/// The method returns a future directly, so implementors can write a plain
/// `async fn` body. No `#[async_trait]` involved.
pub trait Publisher: Send + Sync {
    fn publish(&self, event: RocketEvent) -> impl Future<Output = Result> + Send;
}
