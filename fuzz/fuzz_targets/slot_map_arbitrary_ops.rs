#![no_main]

use libfuzzer_sys::fuzz_target;
use slotkit::{Handle, SlotMap};

// Fuzz arbitrary operation sequences on SlotMap
//
// Tests random sequences of insert, remove, get, get_mut, contains, clear,
// clone, and swap operations, asserting per-operation postconditions and the
// structural invariants after every mutation.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut map: SlotMap<u32> = SlotMap::new();
    let mut issued: Vec<Handle> = Vec::new();

    let mut idx = 0;
    while idx + 1 < data.len() {
        let op = data[idx] % 8;
        let value = u32::from(data[idx + 1]);

        match op {
            0 => {
                // insert
                let old_len = map.len();
                let h = map.insert(value);
                issued.push(h);

                assert!(map.contains(h));
                assert_eq!(map.get(h), Some(&value));
                assert_eq!(map.len(), old_len + 1);
            }
            1 => {
                // remove (handle may already be stale)
                if !issued.is_empty() {
                    let h = issued[(value as usize) % issued.len()];

                    let old_len = map.len();
                    let was_live = map.contains(h);
                    let removed = map.remove(h);

                    assert_eq!(removed.is_some(), was_live);
                    if removed.is_some() {
                        assert_eq!(map.len(), old_len - 1);
                    } else {
                        assert_eq!(map.len(), old_len);
                    }
                    assert!(!map.contains(h));
                    assert_eq!(map.get(h), None);
                }
            }
            2 => {
                // get (read-only)
                if !issued.is_empty() {
                    let h = issued[(value as usize) % issued.len()];
                    assert_eq!(map.get(h).is_some(), map.contains(h));
                }
            }
            3 => {
                // get_mut (in-place update)
                if !issued.is_empty() {
                    let h = issued[(value as usize) % issued.len()];
                    if let Some(slot_value) = map.get_mut(h) {
                        *slot_value = value;
                        assert_eq!(map.get(h), Some(&value));
                    }
                }
            }
            4 => {
                // probe sentinel and foreign handles
                assert!(!map.contains(Handle::NIL));
                assert_eq!(map.remove(Handle::default()), None);
            }
            5 => {
                // clear invalidates everything issued so far
                map.clear();
                assert!(map.is_empty());
                for &h in &issued {
                    assert!(!map.contains(h));
                }
            }
            6 => {
                // clone must be equal and independent
                let snapshot = map.clone();
                assert_eq!(snapshot, map);
                for &h in &issued {
                    assert_eq!(snapshot.get(h), map.get(h));
                }
            }
            7 => {
                // swap with an empty map and back
                let mut other = SlotMap::new();
                map.swap(&mut other);
                assert!(map.is_empty());
                map.swap(&mut other);
            }
            _ => unreachable!(),
        }

        map.check_invariants().unwrap();
        idx += 2;
    }

    // Iteration must visit exactly the live handles.
    let live = issued.iter().filter(|h| map.contains(**h)).count();
    assert_eq!(map.iter().count(), map.len());
    assert_eq!(live, map.len());
});
