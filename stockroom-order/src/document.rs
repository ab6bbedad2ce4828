use std::fmt;

use serde::{Deserialize, Serialize};

pub const DOCUMENT_PREFIX: &str = "IB-";

/// Sequential requisition number, displayed as `IB-` plus six zero-padded digits
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct DocumentNumber(u32);

impl DocumentNumber {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The following number, or `None` once the counter is exhausted
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:06}", DOCUMENT_PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        assert_eq!(DocumentNumber::new(4).to_string(), "IB-000004");
        assert_eq!(DocumentNumber::new(123456).to_string(), "IB-123456");
    }

    #[test]
    fn test_wide_counter_is_not_truncated() {
        assert_eq!(DocumentNumber::new(1_234_567).to_string(), "IB-1234567");
    }

    #[test]
    fn test_next() {
        let n = DocumentNumber::new(9);
        assert_eq!(n.next().unwrap().value(), 10);
        assert_eq!(n.next().unwrap().to_string(), "IB-000010");
    }

    #[test]
    fn test_next_at_counter_limit() {
        assert_eq!(DocumentNumber::new(u32::MAX).next(), None);
        assert_eq!(DocumentNumber::new(u32::MAX - 1).next(), Some(DocumentNumber::new(u32::MAX)));
    }
}
