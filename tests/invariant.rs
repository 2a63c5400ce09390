use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use syncbimap::{BiMap, Error};

fn check<K, V>(map: &BiMap<K, V>)
where K: Eq + Clone + std::hash::Hash + std::fmt::Debug,
      V: Eq + Clone + std::hash::Hash + std::fmt::Debug,
{
    let forward = map.forward_map();
    let inverse = map.inverse_map();
    assert_eq!(forward.len(), inverse.len());
    assert_eq!(forward.len(), map.len());
    for (k, v) in &forward {
        assert_eq!(inverse.get(v), Some(k), "{:?} -> {:?} has no inverse", k, v);
    }
}

#[test]
fn random_operations_keep_bijection() {
    // A small domain so that keys and values collide often.
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = BiMap::new();
        for _ in 0..500 {
            match rng.gen_range(0..4) {
                0 | 1 => {
                    let k: u8 = rng.gen_range(0..16);
                    let v: u8 = rng.gen_range(0..16);
                    map.insert(k, v).unwrap();
                    assert_eq!(map.get(&k), Some(v));
                    assert_eq!(map.get_inverse(&v), Some(k));
                },
                2 => {
                    let k: u8 = rng.gen_range(0..16);
                    let had = map.get(&k);
                    assert_eq!(map.delete(&k).unwrap(), had);
                    assert!(!map.exists(&k));
                    if let Some(v) = had {
                        assert!(!map.exists_inverse(&v));
                    }
                },
                _ => {
                    let v: u8 = rng.gen_range(0..16);
                    let had = map.get_inverse(&v);
                    assert_eq!(map.delete_inverse(&v).unwrap(), had);
                    assert!(!map.exists_inverse(&v));
                    if let Some(k) = had {
                        assert!(!map.exists(&k));
                    }
                },
            }
            check(&map);
        }
    }
}

#[test]
fn random_operations_after_freeze_change_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let map = BiMap::new();
    for _ in 0..64 {
        map.insert(rng.gen_range(0..32u16), rng.gen_range(0..32u16)).unwrap();
    }
    map.make_immutable();
    let forward = map.forward_map();

    for _ in 0..200 {
        let x: u16 = rng.gen_range(0..32);
        let result = match rng.gen_range(0..3) {
            0 => map.insert(x, x),
            1 => map.delete(&x).map(|_| ()),
            _ => map.delete_inverse(&x).map(|_| ()),
        };
        assert_eq!(result, Err(Error::Immutable));
    }
    assert_eq!(map.forward_map(), forward);
    check(&map);
}
