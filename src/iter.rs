//! Iterators over a [`SlotMap`](crate::SlotMap)'s packed storage.
//!
//! Every iterator here walks the packed value array directly, so a full pass
//! costs O(len) no matter how many slots the map has ever allocated. Items
//! come out in packed physical order: unspecified to the caller and subject
//! to change across removals, but stable between mutations. Each pass
//! recomputes from the current packed storage, so iteration is freely
//! restartable.

use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::handle::Handle;
use crate::map::{Entry, Slot};

/// Reconstructs the handle for a packed entry from its back-reference.
fn owner_handle(slots: &[Slot], index: u32) -> Handle {
    match slots[index as usize] {
        Slot::Occupied { generation, .. } => Handle::new(index, generation),
        Slot::Free { .. } => unreachable!("packed entry owned by a free slot"),
    }
}

/// Iterator over `(Handle, &T)` pairs, returned by [`SlotMap::iter`](crate::SlotMap::iter).
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    entries: slice::Iter<'a, Entry<T>>,
    slots: &'a [Slot],
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(entries: &'a [Entry<T>], slots: &'a [Slot]) -> Self {
        Self {
            entries: entries.iter(),
            slots,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((owner_handle(self.slots, entry.slot), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next_back()?;
        Some((owner_handle(self.slots, entry.slot), &entry.value))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Iterator over `(Handle, &mut T)` pairs, returned by
/// [`SlotMap::iter_mut`](crate::SlotMap::iter_mut). Supports in-place
/// mutation of the yielded values.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    entries: slice::IterMut<'a, Entry<T>>,
    slots: &'a [Slot],
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(entries: &'a mut [Entry<T>], slots: &'a [Slot]) -> Self {
        Self {
            entries: entries.iter_mut(),
            slots,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (Handle, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((owner_handle(self.slots, entry.slot), &mut entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next_back()?;
        Some((owner_handle(self.slots, entry.slot), &mut entry.value))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Consuming iterator over `(Handle, T)` pairs, returned by
/// [`SlotMap::into_iter`](crate::SlotMap#impl-IntoIterator-for-SlotMap<T>).
#[derive(Debug)]
pub struct IntoIter<T> {
    entries: vec::IntoIter<Entry<T>>,
    slots: Vec<Slot>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(entries: Vec<Entry<T>>, slots: Vec<Slot>) -> Self {
        Self {
            entries: entries.into_iter(),
            slots,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = (Handle, T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next()?;
        Some((owner_handle(&self.slots, entry.slot), entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = self.entries.next_back()?;
        Some((owner_handle(&self.slots, entry.slot), entry.value))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
