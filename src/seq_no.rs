use std::hash::{Hash, Hasher};

/// Sequence position of a message within its channel.
///
/// JSON allows fractional and negative sequence numbers, so this wraps the
/// raw `f64` and hashes its bit pattern. `-0.0` is normalized to `0.0` on
/// construction so the two cannot slip past deduplication as distinct
/// entries. Values are always finite: JSON cannot encode NaN or infinities,
/// and the decoder is the only producer.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct SeqNo(f64);

impl SeqNo {
    pub fn new(n: f64) -> Self {
        Self(if n == 0.0 { 0.0 } else { n })
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

// Finite, -0.0-normalized values only, so equality is reflexive and agrees
// with the bit-pattern hash.
impl Eq for SeqNo {}

impl Hash for SeqNo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for SeqNo {
    fn from(n: f64) -> Self {
        Self::new(n)
    }
}

impl std::fmt::Display for SeqNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_negative_zero_normalizes() {
        let mut seen = HashSet::new();
        assert!(seen.insert(SeqNo::new(0.0)));
        assert!(!seen.insert(SeqNo::new(-0.0)));
    }

    #[test]
    fn test_fractional_and_negative_are_distinct_keys() {
        let mut seen = HashSet::new();
        assert!(seen.insert(SeqNo::new(1.5)));
        assert!(seen.insert(SeqNo::new(-1.5)));
        assert!(seen.insert(SeqNo::new(1.0)));
        assert!(!seen.insert(SeqNo::new(1.5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(SeqNo::new(10.0).to_string(), "10");
        assert_eq!(SeqNo::new(2.5).to_string(), "2.5");
    }
}
