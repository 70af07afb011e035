// ==============================================
// SLOT MAP BEHAVIOR SCENARIOS (integration)
// ==============================================
//
// End-to-end scenarios exercising the public surface across multiple
// operations: handle lifecycles through erase and slot reuse, copy
// independence, swap semantics, and content equality. Single-operation
// behavior is covered by the unit tests in each source module.

use slotkit::{Handle, SlotMap};

// ==============================================
// Construction
// ==============================================

#[test]
fn new_map_is_empty() {
    let map: SlotMap<i32> = SlotMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);

    let copy = map.clone();
    assert!(copy.is_empty());
    assert_eq!(copy.len(), 0);

    // A default handle is safe to probe against any map.
    let h = Handle::default();
    assert!(!map.contains(h));
}

#[test]
fn with_capacity_preallocates() {
    let map: SlotMap<u64> = SlotMap::with_capacity(64);
    assert!(map.capacity() >= 64);
    assert!(map.is_empty());
}

// ==============================================
// Basic interface
// ==============================================

#[test]
fn insert_erase_index_and_iterate() {
    let mut map = SlotMap::new();
    let h0 = map.insert(0);
    let h1 = map.insert(1);
    assert!(map.contains(h0));

    assert_eq!(map.remove(h1), Some(1));
    map[h0] = 42;
    for value in map.values() {
        assert_eq!(*value, 42);
    }
    assert!(map.get(h0).is_some());
}

#[test]
fn freshly_inserted_handle_is_valid() {
    let mut map = SlotMap::new();
    let h0 = map.insert(0);
    assert_eq!(map.len(), 1);
    assert!(map.contains(h0));
    assert_eq!(map.get(h0), Some(&0));
}

// ==============================================
// Erase / reuse lifecycles
// ==============================================

#[test]
fn large_insert_then_erase_in_order() {
    let mut map = SlotMap::new();
    let handles: Vec<_> = (0..1000).map(|i| map.insert(i)).collect();
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(map.get(*h), Some(&(i as i32)));
        assert_eq!(map.remove(*h), Some(i as i32));
    }
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    map.check_invariants().unwrap();
}

#[test]
fn total_erase_then_double_erase_is_size_neutral() {
    let mut map = SlotMap::new();
    let handles: Vec<_> = (0..10).map(|i| map.insert(i)).collect();
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(map.get(*h), Some(&(i as i32)));
        assert_eq!(map.len(), 10 - i);
        assert_eq!(map.remove(*h), Some(i as i32));
    }
    assert!(map.is_empty());

    // Erasing an already-erased handle changes nothing.
    assert_eq!(map.remove(handles[1]), None);
    assert!(map.is_empty());

    map.insert(0);
    assert!(!map.is_empty());
    map.check_invariants().unwrap();
}

#[test]
fn erased_slot_never_revalidates_old_handle() {
    let mut map = SlotMap::new();
    let h0 = map.insert(0);
    let h5 = map.insert(5);
    let h6 = map.insert(6);
    let h3 = map.insert(3);
    let h1 = map.insert(1);

    assert_eq!(map.remove(h6), Some(6));
    assert_eq!(map.get(h6), None);
    assert_eq!(map.len(), 4);

    assert!(!map.contains(h6));
    assert!(map.contains(h5));
    assert!(map.contains(h3));
    assert!(map.contains(h0));
    assert!(map.contains(h1));

    let h6_new = map.insert(6);
    assert_eq!(map.len(), 5);

    assert!(map.contains(h6_new));
    assert!(!map.contains(h6));
    assert!(map.contains(h5));
    assert!(map.contains(h3));
    assert!(map.contains(h0));
    assert!(map.contains(h1));
    assert_eq!(map.get(h6_new), Some(&6));
}

#[test]
fn long_interleaved_usage_keeps_survivors_intact() {
    let mut map = SlotMap::new();
    let h0 = map.insert(0);
    let h1 = map.insert(1);
    let h4 = map.insert(4);
    let h2 = map.insert(2);
    let h5 = map.insert(5);
    let h6 = map.insert(6);
    let h3 = map.insert(3);
    let h7 = map.insert(7);

    assert_eq!(map.remove(h2), Some(2));
    assert_eq!(map.remove(h4), Some(4));
    assert_eq!(map.remove(h6), Some(6));
    assert_eq!(map[h0], 0);
    assert_eq!(map[h1], 1);
    assert_eq!(map[h3], 3);
    assert_eq!(map[h5], 5);
    assert_eq!(map[h7], 7);

    let h8 = map.insert(8);
    let h9 = map.insert(9);
    assert_eq!(map.remove(h1), Some(1));
    assert_eq!(map.remove(h8), Some(8));
    assert_eq!(map[h0], 0);
    assert_eq!(map[h3], 3);
    assert_eq!(map[h5], 5);
    assert_eq!(map[h7], 7);
    assert_eq!(map[h9], 9);

    assert!(map.contains(h0));
    assert!(!map.contains(h1));
    assert!(!map.contains(h2));
    assert!(map.contains(h3));
    assert!(!map.contains(h4));
    assert!(map.contains(h5));
    assert!(!map.contains(h6));
    assert!(map.contains(h7));
    assert!(!map.contains(h8));
    assert!(map.contains(h9));

    assert_eq!(map.len(), 5);
    map.check_invariants().unwrap();
}

// ==============================================
// Copy, equality, swap
// ==============================================

#[test]
fn clone_and_clone_from_compare_equal() {
    let mut map = SlotMap::new();
    let handles: Vec<_> = (0..10).map(|i| map.insert(i)).collect();

    let copy = map.clone();
    let mut assigned = SlotMap::new();
    assigned.clone_from(&map);
    assert_eq!(map, copy);
    assert_eq!(map, assigned);

    // Handles carry over to both copies with the original values.
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(copy.get(*h), Some(&(i as i32)));
        assert_eq!(assigned.get(*h), Some(&(i as i32)));
    }
}

#[test]
fn immutable_copy_resolves_source_handles() {
    let mut map = SlotMap::new();
    let handles: Vec<_> = (0..10).map(|i| map.insert(i)).collect();

    let copy = map.clone();
    for (i, h) in handles.iter().enumerate() {
        assert_eq!(copy.get(*h), Some(&(i as i32)));
    }
}

#[test]
fn mutating_a_copy_leaves_the_original_unchanged() {
    let mut original = SlotMap::new();
    let handles: Vec<_> = (0..5).map(|i| original.insert(i)).collect();

    let mut copy = original.clone();
    copy[handles[0]] = -1;
    assert_eq!(copy.remove(handles[3]), Some(3));
    copy.insert(100);

    for (i, h) in handles.iter().enumerate() {
        assert_eq!(original.get(*h), Some(&(i as i32)));
    }
    assert_eq!(original.len(), 5);
}

#[test]
fn swap_exchanges_full_contents() {
    let mut fst = SlotMap::new();
    for i in 0..10 {
        fst.insert(i);
    }
    let mut snd = SlotMap::new();
    assert_eq!(fst.len(), 10);
    assert!(!fst.is_empty());
    assert_eq!(snd.len(), 0);
    assert!(snd.is_empty());

    fst.swap(&mut snd);
    assert_eq!(snd.len(), 10);
    assert!(!snd.is_empty());
    assert_eq!(fst.len(), 0);
    assert!(fst.is_empty());

    std::mem::swap(&mut fst, &mut snd);
    assert_eq!(fst.len(), 10);
    assert!(!fst.is_empty());
    assert_eq!(snd.len(), 0);
    assert!(snd.is_empty());
}

#[test]
fn swap_preserves_handle_to_value_mapping() {
    let mut a = SlotMap::new();
    let mut b = SlotMap::new();
    let ha: Vec<_> = (0..4).map(|i| a.insert(i)).collect();
    let hb = b.insert(99);

    a.swap(&mut b);
    for (i, h) in ha.iter().enumerate() {
        assert_eq!(b.get(*h), Some(&(i as i32)));
    }
    assert_eq!(a.get(hb), Some(&99));
    a.check_invariants().unwrap();
    b.check_invariants().unwrap();
}

// ==============================================
// Non-trivial value types
// ==============================================

#[test]
fn owns_heap_allocated_values() {
    let mut map: SlotMap<Vec<i32>> = SlotMap::new();
    let handles: Vec<_> = (1..10).map(|i| map.insert(vec![0; i])).collect();
    for (i, h) in handles.iter().enumerate() {
        let actual = map.get(*h).unwrap();
        assert_eq!(actual.len(), i + 1);
        assert_eq!(actual[i], 0);
        assert!(map.remove(*h).is_some());
    }
    assert!(map.is_empty());

    assert_eq!(map.remove(handles[1]), None);
    map.insert(vec![0]);
    assert!(!map.is_empty());
}
