// Rust guideline compliant 2026-08-24

//! Payload defaulting for generic responses.
//!
//! When a factory constructor is given no payload, construction attempts to
//! substitute an empty instance of the payload type. The substitution only
//! succeeds for constructible container types; everything else stays
//! absent. This asymmetry is intentional: a boxed abstraction cannot be
//! conjured out of thin air, and the factory must not fail over it.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Controls the empty-container substitution applied to absent payloads.
///
/// The provided method leaves substitution off, so a bare
/// `impl Payload for MyType {}` is all a non-container payload type needs.
pub trait Payload: Sized {
    /// Returns an empty instance for constructible container types.
    ///
    /// # Returns
    ///
    /// Some(empty instance) when the type can be defaulted to an empty
    /// container, None otherwise.
    fn empty() -> Option<Self> {
        None
    }
}

impl<T> Payload for Vec<T> {
    fn empty() -> Option<Self> {
        Some(Vec::new())
    }
}

impl<T> Payload for VecDeque<T> {
    fn empty() -> Option<Self> {
        Some(VecDeque::new())
    }
}

impl<K, V> Payload for HashMap<K, V> {
    fn empty() -> Option<Self> {
        Some(HashMap::new())
    }
}

impl<K, V> Payload for BTreeMap<K, V> {
    fn empty() -> Option<Self> {
        Some(BTreeMap::new())
    }
}

impl<T> Payload for HashSet<T> {
    fn empty() -> Option<Self> {
        Some(HashSet::new())
    }
}

impl<T> Payload for BTreeSet<T> {
    fn empty() -> Option<Self> {
        Some(BTreeSet::new())
    }
}

impl Payload for String {
    fn empty() -> Option<Self> {
        Some(String::new())
    }
}

// Boxed payloads cover the trait-object case; there is no way to produce
// an empty instance behind the box, so substitution stays off.
impl<T: ?Sized> Payload for Box<T> {}

impl<T> Payload for Option<T> {}

impl Payload for () {}

macro_rules! scalar_payload {
    ($($ty:ty),* $(,)?) => {
        $(impl Payload for $ty {})*
    };
}

scalar_payload!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);
