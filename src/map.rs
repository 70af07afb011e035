//! Slot map with a slot indirection table and densely packed value storage.
//!
//! Values live contiguously in packed storage; callers hold stable
//! generation-tagged [`Handle`]s that survive any number of unrelated
//! insertions and removals. Erasing an element bumps its slot's generation,
//! so every outstanding handle to it becomes permanently invalid without any
//! bookkeeping on the caller's side.
//!
//! ## Architecture
//!
//! ```text
//!   slots (indirection table)             entries (packed storage)
//!   ┌───────┬──────────────────────┐      ┌─────┬────────────────────┐
//!   │ index │ Slot                 │      │ pos │ Entry              │
//!   ├───────┼──────────────────────┤      ├─────┼────────────────────┤
//!   │   0   │ Occupied { gen: 0,   │      │  0  │ { value: A,        │
//!   │       │   position: 0 } ─────┼────► │     │   slot: 0 }        │
//!   │   1   │ Free { gen: 3,       │      ├─────┼────────────────────┤
//!   │       │   next_free: None }  │  ┌─► │  1  │ { value: C,        │
//!   │   2   │ Occupied { gen: 1,   │  │   │     │   slot: 2 }        │
//!   │       │   position: 1 } ─────┼──┘   └─────┴────────────────────┘
//!   └───────┴──────────────────────┘
//!
//!   free_head ─► slot 1 ─► None          Handle { index, generation }
//! ```
//!
//! Each packed entry records which slot owns it (`slot`), so when a removal
//! relocates the last entry into the vacated position the owning slot can be
//! repointed in O(1). The slot table only grows; erased slots are recycled
//! through an intrusive free list threaded through the `Free` variant.
//!
//! ## Behavior
//! - `insert(value)`: pop a free slot (or grow the table), append the value
//! - `remove(handle)`: swap-with-last in packed storage, bump the slot's
//!   generation, push the slot onto the free list; no-op for stale handles
//! - `get` / `contains`: index + generation check, then one packed access
//!
//! ## Performance
//! - `insert` / `remove` / `get` / `contains`: O(1)
//! - iteration: O(len), independent of how many slots were ever allocated
//! - `swap` / `mem::swap`: O(1) ownership transfer
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::ops::{Index, IndexMut};

use crate::error::InvariantError;
use crate::handle::Handle;
use crate::iter::{IntoIter, Iter, IterMut};

/// Indirection-table entry: either points into packed storage or is linked
/// into the free list. A `Free` slot's `generation` is already incremented
/// past its last occupant, so it is the generation the next handle issued
/// from this slot will carry.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Occupied { generation: u32, position: u32 },
    Free { generation: u32, next_free: Option<u32> },
}

/// Packed-storage entry. `slot` is the back-reference to the owning
/// indirection slot, updated whenever the entry is relocated.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) value: T,
    pub(crate) slot: u32,
}

/// Handle-based container with stable references and packed value storage.
///
/// Cloning produces a fully independent deep copy that preserves all
/// slot/position relationships: every handle valid for the original is valid
/// for the clone with the same value, and mutating either leaves the other
/// untouched.
///
/// # Example
///
/// ```
/// use slotkit::SlotMap;
///
/// let mut map = SlotMap::new();
/// let a = map.insert("alpha");
/// let b = map.insert("beta");
///
/// assert_eq!(map.remove(a), Some("alpha"));
/// assert!(!map.contains(a));
/// assert_eq!(map.get(b), Some(&"beta"));
///
/// // Erased handles stay invalid even after their slot is reused.
/// let c = map.insert("gamma");
/// assert!(!map.contains(a));
/// assert_eq!(map[c], "gamma");
/// ```
#[derive(Debug, Clone)]
pub struct SlotMap<T> {
    slots: Vec<Slot>,
    entries: Vec<Entry<T>>,
    free_head: Option<u32>,
}

impl<T> SlotMap<T> {
    /// Creates an empty map: no slots, no values, empty free list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            entries: Vec::new(),
            free_head: None,
        }
    }

    /// Creates an empty map with room for `capacity` values before either
    /// internal array reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            free_head: None,
        }
    }

    /// Returns the number of values currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of values the packed storage can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the total number of slots ever allocated, occupied or free.
    ///
    /// The slot table never shrinks; erased slots are recycled, not removed.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Reserves capacity for at least `additional` more values.
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
        self.slots.reserve(additional);
    }

    /// Inserts `value` and returns a handle that is valid immediately.
    ///
    /// Reuses the most recently freed slot if one exists, otherwise appends
    /// a fresh slot at generation 0. Never invalidates other handles.
    ///
    /// # Panics
    ///
    /// Panics if the slot table would exceed the `u32` index space.
    ///
    /// # Example
    ///
    /// ```
    /// use slotkit::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let h = map.insert(42);
    /// assert!(map.contains(h));
    /// assert_eq!(map.get(h), Some(&42));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> Handle {
        let position = self.entries.len() as u32;
        let (index, generation) = match self.free_head {
            Some(index) => {
                let generation = match self.slots[index as usize] {
                    Slot::Free {
                        generation,
                        next_free,
                    } => {
                        self.free_head = next_free;
                        generation
                    },
                    Slot::Occupied { .. } => {
                        unreachable!("free list head points at an occupied slot")
                    },
                };
                self.slots[index as usize] = Slot::Occupied {
                    generation,
                    position,
                };
                (index, generation)
            },
            None => {
                // Index u32::MAX is reserved for Handle::NIL.
                assert!(
                    self.slots.len() < u32::MAX as usize,
                    "slot index space exhausted"
                );
                let index = self.slots.len() as u32;
                self.slots.push(Slot::Occupied {
                    generation: 0,
                    position,
                });
                (index, 0)
            },
        };
        self.entries.push(Entry { value, slot: index });
        Handle::new(index, generation)
    }

    /// Removes the value for `handle`, returning it if the handle was valid.
    ///
    /// Stale, already-erased, out-of-range, and [`Handle::NIL`] handles are
    /// all accepted and leave the map unchanged (`None`). On success the
    /// erased slot's generation is bumped (wrapping `u32` arithmetic), so no
    /// outstanding handle at the old generation will ever validate again;
    /// all other handles keep their values even when the swap-with-last
    /// relocates their packed entry.
    ///
    /// # Example
    ///
    /// ```
    /// use slotkit::SlotMap;
    ///
    /// let mut map = SlotMap::new();
    /// let h = map.insert("x");
    /// assert_eq!(map.remove(h), Some("x"));
    /// assert_eq!(map.remove(h), None); // double erase is a no-op
    /// ```
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        let position = self.position(handle)?;
        let index = handle.index();

        // Retire the slot first: generation equality was just verified, so
        // the bumped value strictly exceeds every issued generation.
        self.slots[index as usize] = Slot::Free {
            generation: handle.generation().wrapping_add(1),
            next_free: self.free_head,
        };
        self.free_head = Some(index);

        let removed = self.entries.swap_remove(position);

        // swap_remove moved the former last entry into `position`; repoint
        // its owner slot. Nothing moved if the removed entry was last.
        if let Some(moved) = self.entries.get(position) {
            match &mut self.slots[moved.slot as usize] {
                Slot::Occupied { position: p, .. } => *p = position as u32,
                Slot::Free { .. } => unreachable!("moved entry owned by a free slot"),
            }
        }

        Some(removed.value)
    }

    /// Returns `true` if `handle` currently refers to a stored value.
    pub fn contains(&self, handle: Handle) -> bool {
        self.position(handle).is_some()
    }

    /// Returns a reference to the value for `handle`, or `None` if the
    /// handle is stale or was never issued by this map.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        let position = self.position(handle)?;
        Some(&self.entries[position].value)
    }

    /// Returns a mutable reference to the value for `handle`, or `None` if
    /// the handle is invalid.
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let position = self.position(handle)?;
        Some(&mut self.entries[position].value)
    }

    /// Drops all values and invalidates every outstanding handle.
    ///
    /// Occupied slots get their generation bumped exactly as on
    /// [`remove`](Self::remove); the slot table itself is retained and its
    /// slots are relinked into the free list. O(`slot_count`).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match *slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Free { generation, .. } => generation,
            };
            *slot = Slot::Free {
                generation,
                next_free: self.free_head,
            };
            self.free_head = Some(index as u32);
        }
    }

    /// Exchanges the entire contents of two maps in O(1).
    ///
    /// Handles are container-agnostic: everything valid for `self` before
    /// the call is valid for `other` afterwards, and vice versa.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Returns an iterator over `(Handle, &value)` pairs in packed order.
    ///
    /// The order is unspecified and may change across removals, but is
    /// stable between mutations. O(`len`) per full pass.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entries, &self.slots)
    }

    /// Returns an iterator over `(Handle, &mut value)` pairs in packed order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.entries, &self.slots)
    }

    /// Returns an iterator over the stored values in packed order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Returns an iterator over mutable references to the stored values.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|entry| &mut entry.value)
    }

    /// Returns an iterator over the handles of all stored values.
    pub fn handles(&self) -> impl Iterator<Item = Handle> {
        self.iter().map(|(handle, _)| handle)
    }

    /// Looks up the packed position for `handle`, validating index and
    /// generation.
    fn position(&self, handle: Handle) -> Option<usize> {
        match self.slots.get(handle.index() as usize) {
            Some(&Slot::Occupied {
                generation,
                position,
            }) if generation == handle.generation() => Some(position as usize),
            _ => None,
        }
    }

    /// Verifies the structural invariants tying the slot table, packed
    /// storage, and free list together.
    ///
    /// Intended for tests and fuzz harnesses after a batch of mutations;
    /// O(`slot_count`). Returns the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut occupied = 0usize;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Slot::Occupied { position, .. } = slot {
                occupied += 1;
                let position = *position as usize;
                if position >= self.entries.len() {
                    return Err(InvariantError::new(format!(
                        "slot {index} points at position {position} past packed len {}",
                        self.entries.len()
                    )));
                }
                if self.entries[position].slot as usize != index {
                    return Err(InvariantError::new(format!(
                        "slot {index} and entry {position} back-reference disagree"
                    )));
                }
            }
        }

        if occupied != self.entries.len() {
            return Err(InvariantError::new(format!(
                "{occupied} occupied slots but {} packed entries",
                self.entries.len()
            )));
        }

        // Free-list walk: every free slot exactly once, acyclic, terminated.
        let mut seen = vec![false; self.slots.len()];
        let mut free_len = 0usize;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            let index = index as usize;
            if index >= self.slots.len() {
                return Err(InvariantError::new(format!(
                    "free list references slot {index} past table len {}",
                    self.slots.len()
                )));
            }
            if seen[index] {
                return Err(InvariantError::new(format!(
                    "free list visits slot {index} twice"
                )));
            }
            seen[index] = true;
            free_len += 1;
            cursor = match self.slots[index] {
                Slot::Free { next_free, .. } => next_free,
                Slot::Occupied { .. } => {
                    return Err(InvariantError::new(format!(
                        "free list contains occupied slot {index}"
                    )));
                },
            };
        }

        if free_len != self.slots.len() - occupied {
            return Err(InvariantError::new(format!(
                "free list has {free_len} slots, expected {}",
                self.slots.len() - occupied
            )));
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("slot map invariant violated: {err}");
        }
    }
}

impl<T> Default for SlotMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Content equality: two maps are equal iff their packed-order value
/// sequences are equal element-wise. Handle assignments and internal slot or
/// generation numbering are deliberately not compared; a deep copy always
/// compares equal to its source.
impl<T: PartialEq> PartialEq for SlotMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for SlotMap<T> {}

/// Direct access for handles the caller has already validated, e.g. right
/// after [`SlotMap::insert`].
///
/// # Panics
///
/// Panics if `handle` is stale or was never issued by this map; callers that
/// cannot guarantee validity should use [`SlotMap::get`] instead.
impl<T> Index<Handle> for SlotMap<T> {
    type Output = T;

    fn index(&self, handle: Handle) -> &T {
        self.get(handle).expect("stale or invalid slot map handle")
    }
}

impl<T> IndexMut<Handle> for SlotMap<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut T {
        self.get_mut(handle)
            .expect("stale or invalid slot map handle")
    }
}

impl<'a, T> IntoIterator for &'a SlotMap<T> {
    type Item = (Handle, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SlotMap<T> {
    type Item = (Handle, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SlotMap<T> {
    type Item = (Handle, T);
    type IntoIter = IntoIter<T>;

    /// Consumes the map, yielding `(Handle, value)` pairs in packed order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries, self.slots)
    }
}

impl<T> FromIterator<T> for SlotMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            map.insert(value);
        }
        map
    }
}
