use std::{
    collections::{HashMap, HashSet},
    sync::{Mutex, PoisonError},
};

use crate::{ChannelId, SeqNo};

/// Store of (channel, sequence number) pairs already processed.
///
/// `record` is the only operation and must be one atomic check-and-insert:
/// splitting it into a lookup followed by an insert lets two concurrent
/// identical submissions both observe "not seen" and double-emit.
pub trait SeenStore: Send + Sync {
    /// Record the pair if absent.
    ///
    /// Returns `true` when the pair was new, `false` when it had been seen
    /// before. A pair is recorded exactly once regardless of arrival order
    /// or interleaving.
    fn record(&self, channel: &ChannelId, seq: SeqNo) -> bool;
}

/// In-memory [`SeenStore`] backed by a mutex-guarded map.
///
/// Entries are never evicted, so the map grows for the lifetime of the
/// process. Bounded retention (TTL, LRU, an external cache) belongs in an
/// alternative `SeenStore` implementation, not here.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    seen: Mutex<HashMap<ChannelId, HashSet<SeqNo>>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SeenStore for MemoryLedger {
    fn record(&self, channel: &ChannelId, seq: SeqNo) -> bool {
        // The lock is held only for the map operation, never across an await.
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);
        seen.entry(channel.clone()).or_default().insert(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_record_is_new_second_is_not() {
        let ledger = MemoryLedger::new();
        let channel = ChannelId::new("C1");
        assert!(ledger.record(&channel, SeqNo::new(1.0)));
        assert!(!ledger.record(&channel, SeqNo::new(1.0)));
    }

    #[test]
    fn test_channels_are_independent() {
        let ledger = MemoryLedger::new();
        assert!(ledger.record(&ChannelId::new("C1"), SeqNo::new(1.0)));
        assert!(ledger.record(&ChannelId::new("C2"), SeqNo::new(1.0)));
    }

    #[test]
    fn test_out_of_order_sequence_numbers_record_once_each() {
        let ledger = MemoryLedger::new();
        let channel = ChannelId::new("C1");
        assert!(ledger.record(&channel, SeqNo::new(10.0)));
        assert!(ledger.record(&channel, SeqNo::new(5.0)));
        assert!(!ledger.record(&channel, SeqNo::new(10.0)));
        assert!(!ledger.record(&channel, SeqNo::new(5.0)));
    }

    #[test]
    fn test_negative_zero_dedups_against_zero() {
        let ledger = MemoryLedger::new();
        let channel = ChannelId::new("C1");
        assert!(ledger.record(&channel, SeqNo::new(0.0)));
        assert!(!ledger.record(&channel, SeqNo::new(-0.0)));
    }
}
