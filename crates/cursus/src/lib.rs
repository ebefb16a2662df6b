//! Cursus: a generic container runtime for introductory programming
//! courses.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the cursus sub-crates. For most users, adding `cursus` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cursus::prelude::*;
//!
//! // Build an array from course input and slice out a window.
//! let a = cursus::array::parse_ints("1 2 3 4").unwrap();
//! assert_eq!(a.sub(1, 3).as_slice(), &[2, 3]);
//!
//! // The combinators share one calling convention across containers.
//! let chosen = a.choose(|v, _| (v % 2 == 0).then_some(v * 3));
//! assert_eq!(chosen.as_slice(), &[6, 12]);
//!
//! let mut l: List<i32> = [1, 3, 5].into_iter().collect();
//! l.insert(1, 9);
//! assert_eq!(l.to_vec(), [1, 9, 3, 5]);
//! assert_eq!(l.remove(1), Some(9));
//!
//! // Folds thread their state by mutation; foldl is state-first,
//! // foldr is state-last.
//! let mut sum = 0;
//! l.foldl(&mut sum, |s, v, _| *s += *v);
//! assert_eq!(sum, 9);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cursus-core` | Contract checks, comparator helpers, the `Sequence` trait |
//! | [`array`] | `cursus-array` | `Array<T>`, range/in-place ops, parsing, pointer ownership |
//! | [`list`] | `cursus-list` | `List<T>`, positional ops, copy-based sort/reverse/concat |
//!
//! # Course specializations
//!
//! The course material's int/double/string/pointer containers are plain
//! instantiations of the generic types; the [`aliases`] module names them
//! 1:1 (`IntArray`, `StringList`, `PointerArray<T>`, ...), so every core
//! operation is available on each specialization with no wrapper code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Contract checks, ordering, and the `Sequence` trait (`cursus-core`).
pub use cursus_core as types;

/// Fixed-length arrays and course-input parsing (`cursus-array`).
pub use cursus_array as array;

/// Singly-linked lists (`cursus-list`).
pub use cursus_list as list;

pub mod aliases {
    //! Named instantiations of the course specializations.
    //!
    //! Each alias fixes the element type of a generic container; there is
    //! no wrapper code, so the full core surface applies to every one of
    //! them. The pointer aliases carry the dual free discipline — see
    //! `cursus_array::own` and `cursus_list::own`.

    use cursus_array::Array;
    use cursus_list::List;

    /// Fixed-length array of machine integers.
    pub type IntArray = Array<i32>;
    /// Fixed-length array of double-precision floats.
    pub type DoubleArray = Array<f64>;
    /// Fixed-length array of owned strings (payloads released by `Drop`).
    pub type StringArray = Array<String>;
    /// Fixed-length array of raw heap pointers (dual free discipline).
    pub type PointerArray<T> = Array<*mut T>;

    /// Singly-linked list of machine integers.
    pub type IntList = List<i32>;
    /// Singly-linked list of double-precision floats.
    pub type DoubleList = List<f64>;
    /// Singly-linked list of owned strings (payloads released by `Drop`).
    pub type StringList = List<String>;
    /// Singly-linked list of raw heap pointers (dual free discipline).
    pub type PointerList<T> = List<*mut T>;
}

/// Common imports for typical cursus usage.
///
/// ```rust
/// use cursus::prelude::*;
/// ```
pub mod prelude {
    pub use cursus_array::{Array, ParseError};
    pub use cursus_core::{natural, reversed, Sequence};
    pub use cursus_list::List;

    pub use crate::aliases::{
        DoubleArray, DoubleList, IntArray, IntList, PointerArray, PointerList, StringArray,
        StringList,
    };
}
