use syncbimap::{BiMap, Error};

fn frozen() -> BiMap<&'static str, i32> {
    let m = BiMap::new();
    m.insert("Dummy key", 3).unwrap();
    m.make_immutable();
    m
}

#[test]
fn mutations_are_rejected() {
    let m = frozen();
    let forward = m.forward_map();
    let inverse = m.inverse_map();

    assert_eq!(m.insert("New", 1), Err(Error::Immutable));
    assert_eq!(m.insert("Dummy key", 4), Err(Error::Immutable));
    assert_eq!(m.delete("Dummy key"), Err(Error::Immutable));
    assert_eq!(m.delete_inverse(&3), Err(Error::Immutable));
    assert_eq!(m.clear(), Err(Error::Immutable));
    // Even deleting something that isn't there.
    assert_eq!(m.delete("Missing"), Err(Error::Immutable));

    assert_eq!(m.len(), 1);
    assert_eq!(m.forward_map(), forward);
    assert_eq!(m.inverse_map(), inverse);
}

#[test]
fn reads_still_work() {
    let m = frozen();
    assert_eq!(m.get("Dummy key"), Some(3));
    assert_eq!(m.get_inverse(&3), Some("Dummy key"));
    assert!(m.exists("Dummy key"));
    assert!(m.exists_inverse(&3));
    assert_eq!(m.len(), 1);
    assert_eq!(m.read().iter().count(), 1);
}

#[test]
fn make_immutable_is_idempotent() {
    let m = frozen();
    assert!(m.is_immutable());
    m.make_immutable();
    m.make_immutable();
    assert!(m.is_immutable());
    assert_eq!(m.len(), 1);
}

#[test]
fn starts_mutable() {
    let m: BiMap<u8, u8> = BiMap::default();
    assert!(!m.is_immutable());
}

#[test]
fn batch_after_freeze() {
    let m = frozen();
    let result = m.batch(|w| {
        w.insert("Other", 7)?;
        Ok::<_, Error>(())
    });
    assert_eq!(result, Err(Error::Immutable));
    assert!(!m.exists("Other"));
}

#[test]
fn error_message() {
    assert_eq!(Error::Immutable.to_string(), "cannot modify an immutable bimap");
}
