//! [`Sequence`] implementation for [`List`].

use cursus_core::Sequence;

use crate::List;

impl<T> Sequence<T> for List<T> {
    type Out<U> = List<U>;

    fn len(&self) -> usize {
        List::len(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        List::iter(self)
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = &'a mut T>
    where
        T: 'a,
    {
        List::iter_mut(self)
    }

    fn foldr<S>(&self, state: &mut S, mut f: impl FnMut(&T, &mut S, usize)) {
        // A singly-linked chain cannot walk backwards; buffer the node
        // references once, then fold from the tail.
        let elems: Vec<&T> = List::iter(self).collect();
        for (i, v) in elems.into_iter().enumerate().rev() {
            f(v, state, i);
        }
    }

    fn map<U>(&self, mut f: impl FnMut(&T, usize) -> U) -> List<U> {
        List::iter(self).enumerate().map(|(i, v)| f(v, i)).collect()
    }

    fn filter(&self, mut pred: impl FnMut(&T, usize) -> bool) -> List<T>
    where
        T: Clone,
    {
        let mut out = List::new();
        for (i, v) in List::iter(self).enumerate() {
            if pred(v, i) {
                out.append(v.clone());
            }
        }
        out
    }

    fn choose<U>(&self, mut f: impl FnMut(&T, usize) -> Option<U>) -> List<U> {
        List::iter(self)
            .enumerate()
            .filter_map(|(i, v)| f(v, i))
            .collect()
    }
}
