//! Case-insensitive string hashing and comparison for symbol names
//!
//! Names are hashed with djb2 over their ASCII-lowercased bytes, so two
//! spellings that differ only in case always land in the same bucket. A hash
//! match is only a hint: callers confirm it with [`eq_ignore_case`].

use std::cmp::Ordering;

define_constants! {
    /// Initial djb2 state.
    pub HASH_SEED: u32 = 5381;
    /// Per-byte multiplier (`hash * 33 + c`).
    pub HASH_MULTIPLIER: u32 = 33;
    /// Keeps 31 bits so the hash is always non-negative.
    pub HASH_MASK: u32 = 0x7FFF_FFFF;
}

/// Hashes a symbol name, folding ASCII letters to lowercase
///
/// Arithmetic wraps; only the low 31 bits survive the mask, which makes the
/// result independent of the accumulator width.
///
/// # Example
/// ```
/// use symtab::hash::symbol_hash;
///
/// assert_eq!(symbol_hash("Loop"), symbol_hash("LOOP"));
/// assert_eq!(symbol_hash(""), 5381);
/// ```
#[inline]
#[must_use]
pub fn symbol_hash(name: &str) -> u32 {
    name.bytes()
        .fold(HASH_SEED, |hash, byte| {
            hash.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(u32::from(byte.to_ascii_lowercase()))
        })
        & HASH_MASK
}

/// ASCII case-insensitive equality
#[inline]
#[must_use]
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// ASCII case-insensitive lexicographic ordering
///
/// Bytes are compared after lowercasing; a proper prefix sorts first.
#[inline]
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    fn fold(s: &str) -> impl Iterator<Item = u8> + '_ {
        s.bytes().map(|b| b.to_ascii_lowercase())
    }
    fold(a).cmp(fold(b))
}
