//! Drop-tracking instrumentation for cursus ownership tests.
//!
//! The owning-free contract ("every payload released exactly once") is
//! invisible to ordinary assertions, so tests allocate [`DropToken`]s
//! against a shared [`DropLedger`] and check the construction/drop
//! counters afterwards.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Counters {
    created: AtomicUsize,
    dropped: AtomicUsize,
}

/// Shared ledger counting token constructions and drops.
///
/// Clone-cheap; every clone observes the same counters.
#[derive(Clone, Default)]
pub struct DropLedger {
    counters: Arc<Counters>,
}

impl DropLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a token; increments the construction counter.
    pub fn token(&self) -> DropToken {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        DropToken {
            counters: Arc::clone(&self.counters),
        }
    }

    /// Tokens constructed so far (clones included).
    pub fn created(&self) -> usize {
        self.counters.created.load(Ordering::Relaxed)
    }

    /// Tokens dropped so far.
    pub fn dropped(&self) -> usize {
        self.counters.dropped.load(Ordering::Relaxed)
    }

    /// Tokens currently alive.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }

    /// Assert every constructed token has been dropped — no leak, and
    /// (given Rust's drop discipline) no double release.
    #[track_caller]
    pub fn assert_balanced(&self) {
        assert_eq!(
            self.created(),
            self.dropped(),
            "drop ledger unbalanced: {} created, {} dropped",
            self.created(),
            self.dropped()
        );
    }
}

/// A payload whose construction and drop are recorded in its ledger.
///
/// Cloning mints a fresh token (the clone's drop is counted too), so
/// container operations that clone elements stay balanced.
pub struct DropToken {
    counters: Arc<Counters>,
}

impl Clone for DropToken {
    fn clone(&self) -> Self {
        self.counters.created.fetch_add(1, Ordering::Relaxed);
        Self {
            counters: Arc::clone(&self.counters),
        }
    }
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.counters.dropped.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_counts_constructions_and_drops() {
        let ledger = DropLedger::new();
        let a = ledger.token();
        let b = a.clone();
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.live(), 2);
        drop(a);
        assert_eq!(ledger.dropped(), 1);
        drop(b);
        ledger.assert_balanced();
    }

    #[test]
    #[should_panic(expected = "drop ledger unbalanced")]
    fn assert_balanced_catches_leaks() {
        let ledger = DropLedger::new();
        std::mem::forget(ledger.token());
        ledger.assert_balanced();
    }
}
