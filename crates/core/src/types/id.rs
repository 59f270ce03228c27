//! Order identifiers.
//!
//! Order ids are time-based strings of the form `ORD{unix_millis}`. Two
//! orders placed inside the same millisecond would collide, so ids are
//! minted through a session-scoped [`OrderIdGenerator`] that bumps the
//! clock value when necessary.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A unique order identifier (e.g. `ORD1735686000123`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Prefix shared by all order ids.
    pub const PREFIX: &'static str = "ORD";

    /// Wrap an existing id string (e.g. one read back from the order log).
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mints unique time-based order ids for one session.
///
/// Uniqueness is only guaranteed within the generator instance; the
/// storefront holds one per checkout pipeline, which matches the
/// single-writer storage model.
#[derive(Debug, Default)]
pub struct OrderIdGenerator {
    last_millis: i64,
}

impl OrderIdGenerator {
    /// Create a generator with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_millis: 0 }
    }

    /// Mint the next order id for the given instant.
    ///
    /// If the instant does not advance past the previously minted id, the
    /// millisecond value is bumped so the id is still unique.
    pub fn next(&mut self, now: DateTime<Utc>) -> OrderId {
        let mut millis = now.timestamp_millis();
        if millis <= self.last_millis {
            millis = self.last_millis + 1;
        }
        self.last_millis = millis;
        OrderId(format!("{}{millis}", OrderId::PREFIX))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at_millis(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn test_id_format() {
        let mut generator = OrderIdGenerator::new();
        let id = generator.next(at_millis(1_735_686_000_123));
        assert_eq!(id.as_str(), "ORD1735686000123");
    }

    #[test]
    fn test_same_instant_stays_unique() {
        let mut generator = OrderIdGenerator::new();
        let now = at_millis(1_000);
        let first = generator.next(now);
        let second = generator.next(now);
        let third = generator.next(now);
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(second.as_str(), "ORD1001");
        assert_eq!(third.as_str(), "ORD1002");
    }

    #[test]
    fn test_clock_advancing_uses_clock() {
        let mut generator = OrderIdGenerator::new();
        let _ = generator.next(at_millis(1_000));
        let id = generator.next(at_millis(5_000));
        assert_eq!(id.as_str(), "ORD5000");
    }

    #[test]
    fn test_serde_transparent() {
        let id = OrderId::new("ORD42".to_owned());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"ORD42\"");
    }
}
