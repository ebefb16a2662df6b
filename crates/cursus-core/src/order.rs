//! The comparator convention shared by every sort.
//!
//! A comparator is any `FnMut(&T, &T) -> Ordering`; the three-way result
//! (`Less`, `Equal`, `Greater`) is the total-ordering contract the
//! containers consume. Course code usually passes a named function, so the
//! [`Comparator`] alias names the plain-function form.

use std::cmp::Ordering;

/// A named total-ordering function over `T`.
///
/// Sorts accept any closure with this shape; the alias exists so course
/// material can spell the type of a comparator argument.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// The natural ascending comparator for ordered types.
pub fn natural<T: Ord>() -> Comparator<T> {
    T::cmp
}

/// Wrap a comparator so it orders in the opposite direction.
///
/// Used by the descending list sort; equal elements stay equal.
pub fn reversed<T>(mut cmp: impl FnMut(&T, &T) -> Ordering) -> impl FnMut(&T, &T) -> Ordering {
    move |a, b| cmp(a, b).reverse()
}
