extern crate rand;
extern crate rb_collections;

use self::rand::Rng;
use rb_collections::red_black_tree::{Error, RedBlackMap, RedBlackSet};
use std::collections::BTreeMap;
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_red_black_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 50_000u32);
        let val = rng.gen::<u32>();

        assert_eq!(map.insert(key, val), expected.insert(key, val));
        assert_eq!(map.len(), expected.len());
    }

    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 60_000u32);
        assert_eq!(map.get(&key), expected.get(&key));
        assert_eq!(map.contains_key(&key), expected.contains_key(&key));
        assert_eq!(map.floor(&key), expected.range(..=key).next_back().map(|pair| pair.0));
        assert_eq!(map.ceil(&key), expected.range(key..).next().map(|pair| pair.0));
    }

    assert_eq!(map.min(), expected.keys().next());
    assert_eq!(map.max(), expected.keys().next_back());
}

#[test]
fn int_test_red_black_map_keys() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        map.insert(rng.gen::<u32>(), ());
    }

    let key_set = map.key_set();
    assert_eq!(key_set.len(), map.len());

    let mut keys = key_set.iter();
    let mut prev = None;
    let mut count = 0;
    while keys.has_next() {
        let key = keys.next_key().unwrap();
        assert!(key_set.contains(key));
        if let Some(prev) = prev {
            assert!(prev < key);
        }
        prev = Some(key);
        count += 1;
    }

    assert_eq!(count, map.len());
    assert_eq!(keys.next_key(), Err(Error::Exhausted));
    assert_eq!(keys.remove(), Err(Error::Unsupported));
}

#[test]
fn int_test_red_black_map_sorted_insertions() {
    let mut map = RedBlackMap::new();
    for key in (0..NUM_OF_OPERATIONS).rev() {
        map.insert(key, key * 2);
    }

    assert_eq!(map.len(), NUM_OF_OPERATIONS);
    assert!(map.keys().cloned().eq(0..NUM_OF_OPERATIONS));
    assert!(map.values().cloned().eq((0..NUM_OF_OPERATIONS).map(|key| key * 2)));
}

#[test]
fn int_test_red_black_set() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::with_comparator(|left: &u32, right: &u32| right.cmp(left));
    let mut expected = Vec::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 50_000u32);
        if set.insert(key) {
            expected.push(key);
        }
    }

    expected.sort_by(|left, right| right.cmp(left));
    assert_eq!(set.len(), expected.len());
    assert_eq!(
        set.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
}
