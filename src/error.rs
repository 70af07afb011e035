//! Error types for the slotkit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when the structural invariants tying the
//!   slot table, packed storage, and free list together are violated
//!   ([`SlotMap::check_invariants`](crate::SlotMap::check_invariants)).
//!
//! Stale handles are never errors: `remove` and `get` signal them through
//! `Option`, and `Index`/`IndexMut` treat them as precondition violations
//! (panic). The only reportable failure mode is a broken internal invariant,
//! which tests and fuzz harnesses probe for after mutation batches.
//!
//! ## Example Usage
//!
//! ```
//! use slotkit::SlotMap;
//!
//! let mut map = SlotMap::new();
//! let h = map.insert(1);
//! assert_eq!(map.remove(h), Some(1));
//!
//! // A healthy map reports no violations.
//! assert!(map.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal slot map invariants are violated.
///
/// Produced by [`SlotMap::check_invariants`](crate::SlotMap::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}
