//! The shared combinator surface of the cursus containers.
//!
//! [`Sequence`] fixes one calling convention for the higher-order
//! operations across every container kind. Traversal combinators
//! ([`each`](Sequence::each), [`foldl`](Sequence::foldl),
//! [`exists`](Sequence::exists), [`forall`](Sequence::forall)) are provided
//! once here, on top of the container's iterators. The constructing
//! combinators ([`map`](Sequence::map), [`filter`](Sequence::filter),
//! [`choose`](Sequence::choose)) and the backward fold
//! ([`foldr`](Sequence::foldr)) are per-container: each kind produces a
//! fresh container of its own kind, expressed through the [`Out`]
//! associated type.
//!
//! Two conventions are deliberately distinct and must stay so:
//!
//! - `foldl` passes the accumulator FIRST: `f(&mut state, &elem, index)`,
//!   visiting indices ascending;
//! - `foldr` passes the accumulator LAST: `f(&elem, &mut state, index)`,
//!   visiting indices descending.
//!
//! Both folds thread their state by mutation rather than by return value.
//!
//! [`Out`]: Sequence::Out

/// Shared higher-order operations over a container of `T`.
///
/// Implemented by `Array<T>` and `List<T>`. All callbacks receive the
/// element's position as their index argument; visit order is index 0
/// upward unless documented otherwise. Constructing combinators never
/// mutate or alias their receiver — the result always owns fresh storage.
pub trait Sequence<T> {
    /// Container kind produced by the constructing combinators: an array
    /// maps to an array, a list maps to a list.
    type Out<U>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Iterate the elements front to back.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;

    /// Iterate the elements front to back, mutably.
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut T>
    where
        T: 'a;

    /// `true` when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Call `f(&mut elem, index)` for every element in index order,
    /// mutating elements in place.
    fn each(&mut self, mut f: impl FnMut(&mut T, usize)) {
        for (i, v) in self.iter_mut().enumerate() {
            f(v, i);
        }
    }

    /// Left fold: call `f(&mut state, &elem, index)` for indices
    /// 0, 1, .., n-1. The state argument comes first.
    fn foldl<S>(&self, state: &mut S, mut f: impl FnMut(&mut S, &T, usize)) {
        for (i, v) in self.iter().enumerate() {
            f(state, v, i);
        }
    }

    /// Right fold: call `f(&elem, &mut state, index)` for indices
    /// n-1, n-2, .., 0. The state argument comes last.
    fn foldr<S>(&self, state: &mut S, f: impl FnMut(&T, &mut S, usize));

    /// `true` when `pred(&elem, index)` holds for at least one element.
    /// Stops at the first hit.
    fn exists(&self, mut pred: impl FnMut(&T, usize) -> bool) -> bool {
        self.iter().enumerate().any(|(i, v)| pred(v, i))
    }

    /// `true` when `pred(&elem, index)` holds for every element. Stops at
    /// the first miss; vacuously true for an empty container.
    fn forall(&self, mut pred: impl FnMut(&T, usize) -> bool) -> bool {
        self.iter().enumerate().all(|(i, v)| pred(v, i))
    }

    /// Build a fresh container by calling `f(&elem, index)` per element.
    /// The source is untouched; the output element type is independent of
    /// the input's.
    fn map<U>(&self, f: impl FnMut(&T, usize) -> U) -> Self::Out<U>;

    /// Build a fresh container holding clones of the elements for which
    /// `pred(&elem, index)` holds, preserving original order.
    fn filter(&self, pred: impl FnMut(&T, usize) -> bool) -> Self::Out<T>
    where
        T: Clone;

    /// Combined filter + map in one pass: `f(&elem, index)` returning
    /// `Some(mapped)` includes the mapped value, `None` skips the element.
    /// Present results keep their original relative order.
    fn choose<U>(&self, f: impl FnMut(&T, usize) -> Option<U>) -> Self::Out<U>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal Vec-backed implementor exercising the provided methods.
    struct VecSeq(Vec<i32>);

    impl Sequence<i32> for VecSeq {
        type Out<U> = Vec<U>;

        fn len(&self) -> usize {
            self.0.len()
        }

        fn iter<'a>(&'a self) -> impl Iterator<Item = &'a i32>
        where
            i32: 'a,
        {
            self.0.iter()
        }

        fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut i32>
        where
            i32: 'a,
        {
            self.0.iter_mut()
        }

        fn foldr<S>(&self, state: &mut S, mut f: impl FnMut(&i32, &mut S, usize)) {
            for (i, v) in self.0.iter().enumerate().rev() {
                f(v, state, i);
            }
        }

        fn map<U>(&self, mut f: impl FnMut(&i32, usize) -> U) -> Vec<U> {
            self.0.iter().enumerate().map(|(i, v)| f(v, i)).collect()
        }

        fn filter(&self, mut pred: impl FnMut(&i32, usize) -> bool) -> Vec<i32> {
            let mut out = Vec::new();
            for (i, v) in self.0.iter().enumerate() {
                if pred(v, i) {
                    out.push(*v);
                }
            }
            out
        }

        fn choose<U>(&self, mut f: impl FnMut(&i32, usize) -> Option<U>) -> Vec<U> {
            self.0.iter().enumerate().filter_map(|(i, v)| f(v, i)).collect()
        }
    }

    #[test]
    fn foldl_threads_state_ascending() {
        let s = VecSeq(vec![1, 2, 3, 4]);
        let mut order = Vec::new();
        let mut sum = 0;
        s.foldl(&mut sum, |acc, v, i| {
            order.push(i);
            *acc += *v;
        });
        assert_eq!(sum, 10);
        assert_eq!(order, [0, 1, 2, 3]);
    }

    #[test]
    fn foldr_threads_state_descending() {
        let s = VecSeq(vec![1, 2, 3, 4]);
        let mut acc = 0;
        // 1 - (2 - (3 - (4 - 0))) = -2
        s.foldr(&mut acc, |v, st, _| *st = *v - *st);
        assert_eq!(acc, -2);
    }

    #[test]
    fn exists_short_circuits() {
        let s = VecSeq(vec![1, 2, 3]);
        let mut calls = 0;
        assert!(s.exists(|v, _| {
            calls += 1;
            *v == 2
        }));
        assert_eq!(calls, 2);
    }

    #[test]
    fn forall_vacuous_on_empty() {
        let s = VecSeq(vec![]);
        assert!(s.forall(|_, _| false));
    }

    #[test]
    fn each_mutates_in_index_order() {
        let mut s = VecSeq(vec![10, 20, 30]);
        s.each(|v, i| *v += i as i32);
        assert_eq!(s.0, [10, 21, 32]);
    }
}
