//! Stable, copyable handles into a [`SlotMap`](crate::SlotMap).
//!
//! A [`Handle`] names a slot in the map's indirection table together with the
//! generation that slot carried when the handle was issued. The map bumps a
//! slot's generation on every erase, so a handle held across the removal of
//! its element (or across a later reuse of its slot) simply stops validating
//! instead of silently pointing at a different value.
//!
//! Handles are plain data: copying one never affects the map, dropping one
//! releases nothing, and any handle (including [`Handle::NIL`]) may be passed
//! to [`contains`](crate::SlotMap::contains), [`get`](crate::SlotMap::get),
//! or [`remove`](crate::SlotMap::remove) without precondition.

/// Generation-tagged reference to a value stored in a [`SlotMap`](crate::SlotMap).
///
/// The default handle is [`Handle::NIL`], a sentinel that never validates
/// against any slot a map can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle {
    index: u32,
    generation: u32,
}

impl Handle {
    /// Sentinel handle; never valid for any map.
    ///
    /// Slot indices are capped below `u32::MAX`, so no issued handle can
    /// collide with it.
    pub const NIL: Handle = Handle {
        index: u32::MAX,
        generation: u32::MAX,
    };

    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot index this handle refers to.
    pub fn index(self) -> u32 {
        self.index
    }

    /// Returns the generation the slot carried when this handle was issued.
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// Returns `true` if this is the [`NIL`](Handle::NIL) sentinel.
    pub fn is_nil(self) -> bool {
        self == Self::NIL
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::NIL
    }
}
