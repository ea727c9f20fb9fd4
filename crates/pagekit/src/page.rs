//! Page arithmetic.
//!
//! Pure functions shared by the paginator and by renderers that want to
//! reason about pages without holding a [`Paginator`](crate::Paginator).
//! None of them panic, whatever the inputs.

use std::ops::Range;

/// Number of pages needed to show `len` items, `page_size` at a time.
///
/// Returns 0 for an empty collection (and for a zero page size, which a
/// paginator never holds).
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Highest valid page index, or 0 when there are no pages.
pub fn last_index(page_count: usize) -> usize {
    page_count.saturating_sub(1)
}

/// All valid page indexes, `0..page_count`, in order.
pub fn page_indexes(page_count: usize) -> Vec<usize> {
    (0..page_count).collect()
}

/// Item range covered by page `index`.
///
/// The range is always within `0..=len`; past the end it is empty.
pub fn page_bounds(len: usize, page_size: usize, index: usize) -> Range<usize> {
    let start = index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Constrain a requested page index to `[0, last_index(page_count)]`.
pub fn clamp_index(requested: isize, page_count: usize) -> usize {
    match usize::try_from(requested) {
        Ok(index) => index.min(last_index(page_count)),
        Err(_) => 0,
    }
}
