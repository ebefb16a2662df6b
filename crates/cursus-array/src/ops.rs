//! Range and in-place operations on [`Array`].
//!
//! Range operations (`sub`, `concat`, the blits) follow the container
//! contract: results are always freshly allocated and never alias the
//! input; signed indices let course code written against int indices port
//! directly. In-place operations (`reverse`, `shuffle`, `sort_by`) mutate
//! the receiver and allocate nothing.

use std::cmp::Ordering;

use cursus_core::contract;
use rand::{Rng, RngExt};

use crate::Array;

impl<T: Clone> Array<T> {
    /// New array holding the clamped half-open range `[max(i,0), min(j,len))`.
    ///
    /// An empty clamped range (including `j <= i`) yields a fresh
    /// zero-length array, never an error.
    pub fn sub(&self, i: isize, j: isize) -> Array<T> {
        let len = self.len();
        let lo = i.max(0) as usize;
        let hi = if j < 0 { 0 } else { (j as usize).min(len) };
        if lo >= hi {
            return Array::default();
        }
        Array::from_slice(&self.as_slice()[lo..hi])
    }

    /// New array with `self`'s elements followed by `other`'s.
    pub fn concat(&self, other: &Array<T>) -> Array<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// Copy `count` elements from `src` starting at `si` into `self`
    /// starting at `di`.
    ///
    /// `count <= 0` is a no-op. For copying within one array (where source
    /// and destination may overlap) use [`blit_within`](Array::blit_within).
    ///
    /// # Panics
    ///
    /// Panics when `si` or `di` is negative, when `[si, si+count)` escapes
    /// `src`, or when `[di, di+count)` escapes `self`.
    #[track_caller]
    pub fn blit_from(&mut self, di: isize, src: &Array<T>, si: isize, count: isize) {
        if count <= 0 {
            return;
        }
        let count = count as usize;
        let si = contract::check_offset(si, "source");
        let di = contract::check_offset(di, "destination");
        contract::check_span(si, count, src.len(), "source");
        contract::check_span(di, count, self.len(), "destination");
        self.as_mut_slice()[di..di + count].clone_from_slice(&src.as_slice()[si..si + count]);
    }

    /// Copy `count` elements within `self` from `si` to `di`.
    ///
    /// Overlapping ranges behave as if copied through a temporary
    /// (`memmove` semantics) — the lecture exercises rely on shifting a
    /// window inside one array. `count <= 0` is a no-op.
    ///
    /// # Panics
    ///
    /// Panics when `si` or `di` is negative or either span escapes the
    /// array.
    #[track_caller]
    pub fn blit_within(&mut self, si: isize, di: isize, count: isize) {
        if count <= 0 {
            return;
        }
        let count = count as usize;
        let si = contract::check_offset(si, "source");
        let di = contract::check_offset(di, "destination");
        contract::check_span(si, count, self.len(), "source");
        contract::check_span(di, count, self.len(), "destination");
        // Overlap-safe: stage the source window before writing.
        let tmp: Vec<T> = self.as_slice()[si..si + count].to_vec();
        self.as_mut_slice()[di..di + count].clone_from_slice(&tmp);
    }
}

impl<T> Array<T> {
    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    /// Uniformly shuffle the elements in place.
    ///
    /// Fisher–Yates from the last index down; pass a seeded RNG for a
    /// reproducible permutation.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        let data = self.as_mut_slice();
        for i in (1..data.len()).rev() {
            let j = rng.random_range(0..=i);
            data.swap(i, j);
        }
    }

    /// Sort the elements in place by the given comparator.
    ///
    /// The comparator must be a total ordering; no stability guarantee.
    pub fn sort_by(&mut self, mut cmp: impl FnMut(&T, &T) -> Ordering) {
        self.as_mut_slice().sort_unstable_by(|a, b| cmp(a, b));
    }

    /// `true` when some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Index of the first element equal to `value`, front to back.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}
