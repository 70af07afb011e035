//! Convenience re-exports for the common slotkit surface.

pub use crate::error::InvariantError;
pub use crate::handle::Handle;
pub use crate::map::SlotMap;
