//! Copy-based list operations: sort, reverse, concat.
//!
//! None of these mutate the receiver — each builds a fresh list and leaves
//! the source untouched, matching the container contract that results
//! never alias their input.

use std::cmp::Ordering;

use cursus_array::Array;
use cursus_core::order;

use crate::List;

impl<T: Clone> List<T> {
    /// New list with this list's elements sorted ascending by `cmp`.
    ///
    /// Not in place: the elements are copied into a temporary array, the
    /// array is sorted, and a fresh list is rebuilt from it. The source is
    /// untouched. No stability guarantee.
    pub fn sorted_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> List<T> {
        let mut staging: Array<T> = self.iter().cloned().collect();
        staging.sort_by(cmp);
        staging.into_iter().collect()
    }

    /// New list sorted descending by `cmp` (i.e. by the reversed
    /// comparator).
    pub fn sorted_desc_by(&self, cmp: impl FnMut(&T, &T) -> Ordering) -> List<T> {
        self.sorted_by(order::reversed(cmp))
    }

    /// New list with this list's elements in reverse order.
    ///
    /// Built by prepending every source element in forward order; the
    /// source is untouched.
    pub fn reversed(&self) -> List<T> {
        let mut out = List::new();
        for v in self.iter() {
            out.prepend(v.clone());
        }
        out
    }

    /// New list with `self`'s elements followed by `other`'s, all copied.
    pub fn concat(&self, other: &List<T>) -> List<T> {
        self.iter().chain(other.iter()).cloned().collect()
    }
}
