//! The fixed-length array type: construction and element access.

use cursus_core::contract;

/// A fixed-length container over one owned contiguous buffer.
///
/// The length is fixed at creation and never changes; every operation that
/// would change it ([`sub`](Array::sub), [`concat`](Array::concat), the
/// constructing combinators) allocates a fresh array instead.
///
/// Element access is fail-fast: [`get`](Array::get), [`set`](Array::set)
/// and the `[]` operator panic outside `[0, len)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array<T> {
    data: Box<[T]>,
}

impl<T> Array<T> {
    /// Create an array of `n` copies of `value`.
    ///
    /// The generic replacement for zero-filled creation: numeric course
    /// code writes `Array::filled(n, 0)`.
    pub fn filled(n: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; n].into_boxed_slice(),
        }
    }

    /// Create an array of `n` default-valued elements (zeroes, for the
    /// numeric types).
    pub fn of_default(n: usize) -> Self
    where
        T: Default,
    {
        Self::generate(n, |_| T::default())
    }

    /// Create an array of `n` elements, calling `init(index)` once per
    /// slot in ascending index order 0, 1, .., n-1.
    ///
    /// The ascending order is part of the contract — callers may keep
    /// running state in `init` (e.g. `index * index` tables).
    pub fn generate(n: usize, init: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..n).map(init).collect(),
        }
    }

    /// Create an array by copying every element of `buf`.
    pub fn from_slice(buf: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            data: buf.to_vec().into_boxed_slice(),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` when the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Shared reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        contract::check_index(index, self.data.len());
        &self.data[index]
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        contract::check_index(index, self.data.len());
        &mut self.data[index]
    }

    /// Move `value` into the slot at `index`, dropping the previous
    /// element (value semantics, no aliasing).
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        contract::check_index(index, self.data.len());
        self.data[index] = value;
    }

    /// View the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Copy the elements into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate the elements front to back, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Default for Array<T> {
    /// The empty array.
    fn default() -> Self {
        Self { data: Box::new([]) }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(v: Vec<T>) -> Self {
        Self {
            data: v.into_boxed_slice(),
        }
    }
}

impl<T> From<Box<[T]>> for Array<T> {
    fn from(data: Box<[T]>) -> Self {
        Self { data }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> std::ops::Index<usize> for Array<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.get(index)
    }
}

impl<T> std::ops::IndexMut<usize> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index)
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
