//! Shared fixtures for the cursus benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use cursus_array::Array;
use cursus_list::List;

/// Deterministic pseudo-random array of `n` elements (no RNG dependency in
/// the fixture itself; a multiplicative hash scrambles the index).
pub fn scrambled_array(n: usize) -> Array<u64> {
    Array::generate(n, |i| (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Deterministic pseudo-random list of `n` elements.
pub fn scrambled_list(n: usize) -> List<u64> {
    (0..n as u64)
        .map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15))
        .collect()
}
