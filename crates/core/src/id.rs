//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are opaque strings (`"STK-001"`, `"ORD-002"`, `"3"`). Assigning
//! new ones is the job of an [`IdGenerator`], never of the domain types.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a catalog product (stock item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

/// Identifier of a finalized order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

macro_rules! impl_string_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw identifier without validation.
            ///
            /// Use `parse()` for untrusted input.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: blank", $name)));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }
    };
}

impl_string_id!(ProductId, "ProductId");
impl_string_id!(CustomerId, "CustomerId");
impl_string_id!(OrderId, "OrderId");

/// Source of fresh order identifiers.
pub trait IdGenerator {
    fn next_order_id(&mut self) -> OrderId;
}

/// Monotonic `PREFIX-NNN` identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    width: usize,
    last: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>, width: usize) -> Self {
        Self {
            prefix: prefix.into(),
            width,
            last: 0,
        }
    }

    /// Continue numbering after `last`, so ids already handed out are skipped.
    pub fn starting_after(mut self, last: u64) -> Self {
        self.last = last;
        self
    }

    /// Highest sequence number among ids carrying this generator's prefix.
    pub fn highest_in<'a>(&self, ids: impl IntoIterator<Item = &'a OrderId>) -> u64 {
        let lead = format!("{}-", self.prefix);
        ids.into_iter()
            .filter_map(|id| id.as_str().strip_prefix(lead.as_str()))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }
}

impl IdGenerator for SequentialIds {
    fn next_order_id(&mut self) -> OrderId {
        self.last += 1;
        OrderId(format!(
            "{}-{:0width$}",
            self.prefix,
            self.last,
            width = self.width
        ))
    }
}

/// `PREFIX-<uuidv7>` identifiers (time-ordered, collision free).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UuidIds {
    prefix: String,
}

impl UuidIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl IdGenerator for UuidIds {
    fn next_order_id(&mut self) -> OrderId {
        OrderId(format!("{}-{}", self.prefix, Uuid::now_v7()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_ids() {
        let err = "   ".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.contains("ProductId")));
    }

    #[test]
    fn parse_trims_whitespace() {
        let id: CustomerId = " 3 ".parse().unwrap();
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn sequential_ids_are_zero_padded_and_monotonic() {
        let mut ids = SequentialIds::new("ORD", 3);
        assert_eq!(ids.next_order_id(), OrderId::new("ORD-001"));
        assert_eq!(ids.next_order_id(), OrderId::new("ORD-002"));
    }

    #[test]
    fn sequential_ids_continue_after_existing_orders() {
        let existing = [
            OrderId::new("ORD-001"),
            OrderId::new("ORD-007"),
            OrderId::new("INV-900"),
            OrderId::new("ORD-abc"),
        ];
        let ids = SequentialIds::new("ORD", 3);
        let last = ids.highest_in(existing.iter());
        assert_eq!(last, 7);

        let mut ids = ids.starting_after(last);
        assert_eq!(ids.next_order_id().as_str(), "ORD-008");
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidIds::new("ORD");
        let a = ids.next_order_id();
        let b = ids.next_order_id();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("ORD-"));
    }
}
