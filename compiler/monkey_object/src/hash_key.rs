//! Hash keys for the hashable object kinds.
//!
//! Only integers, strings and booleans are hashable. Two values that are
//! equal under `==` for these kinds produce equal keys; the kind tag keeps
//! `1` and `true` apart.

use crate::value::ObjectKind;

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 1_099_511_628_211;

/// Identity of a hash entry: kind tag plus a 64-bit digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    pub kind: ObjectKind,
    pub digest: u64,
}

impl HashKey {
    #[inline]
    pub const fn new(kind: ObjectKind, digest: u64) -> Self {
        HashKey { kind, digest }
    }
}

/// Payloads that can key a hash.
pub trait Hashable {
    fn hash_key(&self) -> HashKey;
}

impl Hashable for i64 {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::new(ObjectKind::Integer, u64::from_ne_bytes(self.to_ne_bytes()))
    }
}

impl Hashable for bool {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::new(ObjectKind::Boolean, u64::from(*self))
    }
}

impl Hashable for str {
    fn hash_key(&self) -> HashKey {
        HashKey::new(ObjectKind::String, fnv1a(self.as_bytes()))
    }
}

/// FNV-1a over `bytes`.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}
