//! [`Sequence`] implementation for [`Array`].

use cursus_core::Sequence;
use smallvec::SmallVec;

use crate::Array;

impl<T> Sequence<T> for Array<T> {
    type Out<U> = Array<U>;

    fn len(&self) -> usize {
        Array::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut T>
    where
        T: 'a,
    {
        self.as_mut_slice().iter_mut()
    }

    fn foldr<S>(&self, state: &mut S, mut f: impl FnMut(&T, &mut S, usize)) {
        for (i, v) in self.as_slice().iter().enumerate().rev() {
            f(v, state, i);
        }
    }

    fn map<U>(&self, mut f: impl FnMut(&T, usize) -> U) -> Array<U> {
        let slice = self.as_slice();
        Array::generate(slice.len(), |i| f(&slice[i], i))
    }

    fn filter(&self, mut pred: impl FnMut(&T, usize) -> bool) -> Array<T>
    where
        T: Clone,
    {
        // Two passes: evaluate the predicate for every element, then copy
        // the keepers in original order. The mask stays on the stack for
        // small arrays.
        let mut keep: SmallVec<[bool; 32]> = SmallVec::with_capacity(self.len());
        for (i, v) in self.as_slice().iter().enumerate() {
            keep.push(pred(v, i));
        }
        self.as_slice()
            .iter()
            .zip(keep.iter())
            .filter(|(_, k)| **k)
            .map(|(v, _)| v.clone())
            .collect()
    }

    fn choose<U>(&self, mut f: impl FnMut(&T, usize) -> Option<U>) -> Array<U> {
        self.as_slice()
            .iter()
            .enumerate()
            .filter_map(|(i, v)| f(v, i))
            .collect()
    }
}
