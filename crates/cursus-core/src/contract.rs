//! Fail-fast precondition checks.
//!
//! Containers validate their preconditions with these helpers. A violated
//! precondition is a programmer bug, not a runtime condition, so every
//! check panics immediately with a diagnostic naming the precondition —
//! nothing here returns a `Result`.
//!
//! Benign edge cases (an empty clamped sub-range, a copy of zero elements,
//! removal past the end of a list) are *not* precondition violations and
//! never reach this module; callers handle them by returning the empty or
//! default result.

/// Panic unless `index` lies in `[0, len)`.
///
/// # Panics
///
/// Panics when `index >= len`, naming both values.
#[track_caller]
#[inline]
pub fn check_index(index: usize, len: usize) {
    if index >= len {
        panic!("index {index} out of range for length {len}");
    }
}

/// Panic unless the half-open span `[start, start + count)` lies inside a
/// buffer of length `len`.
///
/// `what` names the buffer in the diagnostic (e.g. `"source"`,
/// `"destination"`).
///
/// # Panics
///
/// Panics when the span escapes `[0, len)`.
#[track_caller]
#[inline]
pub fn check_span(start: usize, count: usize, len: usize, what: &str) {
    // Overflow-safe form of `start + count <= len`.
    if count > len || start > len - count {
        panic!("{what} span [{start}, {start}+{count}) out of range for length {len}");
    }
}

/// Panic unless the signed offset `start` is non-negative, returning it as
/// a `usize`.
///
/// Copy operations take signed offsets so that course code written against
/// int indices ports over directly; a negative start is a contract
/// violation, not a clamped edge case.
///
/// # Panics
///
/// Panics when `start < 0`.
#[track_caller]
#[inline]
pub fn check_offset(start: isize, what: &str) -> usize {
    if start < 0 {
        panic!("{what} offset {start} is negative");
    }
    start as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_accepts_in_range() {
        check_index(0, 1);
        check_index(4, 5);
    }

    #[test]
    #[should_panic(expected = "index 5 out of range for length 5")]
    fn check_index_rejects_length() {
        check_index(5, 5);
    }

    #[test]
    #[should_panic(expected = "out of range for length 0")]
    fn check_index_rejects_empty() {
        check_index(0, 0);
    }

    #[test]
    fn check_span_accepts_full_buffer() {
        check_span(0, 8, 8, "source");
    }

    #[test]
    fn check_span_accepts_empty_span_at_end() {
        check_span(8, 0, 8, "source");
    }

    #[test]
    #[should_panic(expected = "destination span [6, 6+3) out of range for length 8")]
    fn check_span_rejects_overrun() {
        check_span(6, 3, 8, "destination");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn check_span_rejects_count_past_everything() {
        // count > len must not underflow the range arithmetic.
        check_span(0, usize::MAX, 8, "source");
    }

    #[test]
    fn check_offset_passes_through_non_negative() {
        assert_eq!(check_offset(0, "source"), 0);
        assert_eq!(check_offset(7, "source"), 7);
    }

    #[test]
    #[should_panic(expected = "source offset -1 is negative")]
    fn check_offset_rejects_negative() {
        check_offset(-1, "source");
    }
}
