//! slotkit: generation-tagged slot map with densely packed value storage.
//!
//! Stores values of a single element type behind stable, copyable
//! [`Handle`]s. A handle stays valid until its value is explicitly removed
//! and becomes safely, permanently invalid afterwards, even if the
//! underlying slot is later reused, with no bookkeeping required from the
//! caller. Insert, remove, lookup, and validity checks are all O(1);
//! iteration walks the packed storage and is proportional to the live count.
//!
//! See the [`map`] module documentation for the internal architecture and
//! invariants.

pub mod error;
pub mod handle;
pub mod iter;
pub mod map;
pub mod prelude;

pub use error::InvariantError;
pub use handle::Handle;
pub use iter::{IntoIter, Iter, IterMut};
pub use map::SlotMap;
