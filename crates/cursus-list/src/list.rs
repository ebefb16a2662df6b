//! The singly-linked list type: chain maintenance and positional access.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use cursus_core::contract;

use crate::node::Node;

/// A singly-linked container with O(1) append/prepend and O(i) positional
/// access.
///
/// # Chain invariants
///
/// - `first` is `None` iff the list is empty, and then `last` is `None`
///   too.
/// - The tail node's `next` is `None`; following `next` from `first`
///   visits exactly `len` nodes and ends at `last`.
/// - Every node is owned by exactly one chain; unlinking a node is the
///   only way it leaves the chain, and frees it.
///
/// All `unsafe` in this module relies on those invariants; every public
/// operation restores them before returning.
pub struct List<T> {
    first: Option<NonNull<Node<T>>>,
    last: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

// The chain is exclusively owned, so the list moves between threads
// whenever its elements may.
unsafe impl<T: Send> Send for List<T> {}
unsafe impl<T: Sync> Sync for List<T> {}

impl<T> List<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            first: None,
            last: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Number of elements (maintained, not counted).
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Append `value` at the tail. O(1).
    pub fn append(&mut self, value: T) {
        let node = Node::alloc(value);
        match self.last {
            // SAFETY: `last` is a live tail node owned by this chain.
            Some(last) => unsafe { (*last.as_ptr()).next = Some(node) },
            None => self.first = Some(node),
        }
        self.last = Some(node);
        self.len += 1;
    }

    /// Prepend `value` at the head. O(1).
    pub fn prepend(&mut self, value: T) {
        let node = Node::alloc(value);
        // SAFETY: the fresh node is not yet linked anywhere.
        unsafe { (*node.as_ptr()).next = self.first };
        self.first = Some(node);
        if self.last.is_none() {
            self.last = Some(node);
        }
        self.len += 1;
    }

    /// Walk to the node at `index`.
    ///
    /// # Panics
    ///
    /// Panics when the walk would leave the list (`index >= len`).
    #[track_caller]
    fn node_at(&self, index: usize) -> NonNull<Node<T>> {
        contract::check_index(index, self.len);
        let mut cur = self.first.expect("len > 0 implies a first node");
        for _ in 0..index {
            // SAFETY: the first `len` nodes are live and linked.
            cur = unsafe { cur.as_ref() }.next.expect("chain holds len nodes");
        }
        cur
    }

    /// Shared reference to the element at `index`. O(i).
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        // SAFETY: node_at returns a live node of this chain.
        unsafe { &(*self.node_at(index).as_ptr()).value }
    }

    /// Mutable reference to the element at `index`. O(i).
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: node_at returns a live node of this chain, and `&mut
        // self` guarantees exclusive access.
        unsafe { &mut (*self.node_at(index).as_ptr()).value }
    }

    /// Replace the element at `index`, dropping the previous one (value
    /// semantics). O(i).
    ///
    /// # Panics
    ///
    /// Panics when `index` is outside `[0, len)`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        *self.get_mut(index) = value;
    }

    /// Splice a new node holding `value` in front of position `index`.
    ///
    /// `index <= 0` prepends — front insertion is the fallback, never a
    /// silent drop. `index == len` appends. O(i).
    ///
    /// # Panics
    ///
    /// Panics when the walk to the predecessor leaves the list
    /// (`index > len`).
    #[track_caller]
    pub fn insert(&mut self, index: isize, value: T) {
        if index <= 0 {
            self.prepend(value);
            return;
        }
        let i = index as usize;
        if i == self.len {
            self.append(value);
            return;
        }
        let prev = self.node_at(i - 1);
        let node = Node::alloc(value);
        // SAFETY: `prev` is live; the fresh node takes over its link.
        unsafe {
            (*node.as_ptr()).next = prev.as_ref().next;
            (*prev.as_ptr()).next = Some(node);
        }
        self.len += 1;
    }

    /// Unlink and free the node at `index`, returning its element.
    ///
    /// `index <= 0` removes the head. Removing from an empty list, or at
    /// an index beyond the tail, is a silent no-op returning `None` — NOT
    /// a contract violation, unlike [`get`](List::get)/[`set`](List::set)/
    /// [`insert`](List::insert). The asymmetry is inherited from the
    /// course material this library reimplements and is preserved
    /// deliberately.
    pub fn remove(&mut self, index: isize) -> Option<T> {
        if index <= 0 {
            return self.unlink_first();
        }
        let i = index as usize;
        if i >= self.len {
            return None;
        }
        let prev = self.node_at(i - 1);
        // SAFETY: `i < len`, so the predecessor has a live successor;
        // relinking `prev` keeps the chain invariants before reclaim.
        unsafe {
            let node = prev.as_ref().next.expect("i < len implies a successor");
            (*prev.as_ptr()).next = node.as_ref().next;
            if node.as_ref().next.is_none() {
                self.last = Some(prev);
            }
            self.len -= 1;
            Some(Node::reclaim(node))
        }
    }

    /// Unlink and free the head node, returning its element.
    fn unlink_first(&mut self) -> Option<T> {
        self.first.map(|node| {
            // SAFETY: the head is live; advancing `first` unlinks it.
            unsafe {
                self.first = node.as_ref().next;
                if self.first.is_none() {
                    self.last = None;
                }
                self.len -= 1;
                Node::reclaim(node)
            }
        })
    }

    /// The head element, if any.
    pub fn first(&self) -> Option<&T> {
        // SAFETY: `first` is live when present.
        self.first.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// The tail element, if any.
    pub fn last(&self) -> Option<&T> {
        // SAFETY: `last` is live when present.
        self.last.map(|n| unsafe { &(*n.as_ptr()).value })
    }

    /// Iterate the elements front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first,
            marker: PhantomData,
        }
    }

    /// Iterate the elements front to back, mutably.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.first,
            marker: PhantomData,
        }
    }

    /// Copy the elements into a fresh `Vec`, front to back.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// `true` when some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    /// Index of the first element equal to `value`, front to back.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        // Iterative teardown; recursing through `next` would overflow the
        // stack on long chains.
        let mut cur = self.first.take();
        self.last = None;
        self.len = 0;
        while let Some(node) = cur {
            // SAFETY: each node is owned by the chain and visited once.
            unsafe {
                cur = node.as_ref().next;
                drop(Box::from_raw(node.as_ptr()));
            }
        }
    }
}

impl<T> Default for List<T> {
    /// The empty list.
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.append(v);
        }
    }
}

/// Borrowing front-to-back iterator over a [`List`].
pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the node outlives 'a and is only read through shared
            // references.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}

/// Mutably borrowing front-to-back iterator over a [`List`].
pub struct IterMut<'a, T> {
    next: Option<NonNull<Node<T>>>,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.next.map(|node| {
            // SAFETY: exclusive borrow of the list; each node is yielded
            // at most once, so the &mut references never alias.
            let node = unsafe { &mut *node.as_ptr() };
            self.next = node.next;
            &mut node.value
        })
    }
}

/// Owning front-to-back iterator over a [`List`].
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.unlink_first()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
