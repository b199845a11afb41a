use core::num::NonZeroUsize;

use pharmstock_inventory::Medicine;

/// Number of pages needed to show `len` records, `page_size` at a time.
///
/// Zero for an empty collection.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// The 1-based `page`-th window of `page_size` records.
///
/// The window is clipped to the available length; an out-of-range page (0, or
/// past the end) yields an empty sequence, not an error. Rejecting bad page
/// *requests* is the app layer's job; this projection just answers what the
/// window contains.
pub fn paginate(records: &[Medicine], page_size: NonZeroUsize, page: usize) -> Vec<Medicine> {
    if page == 0 {
        return Vec::new();
    }
    let offset = (page - 1).saturating_mul(page_size.get());
    records
        .iter()
        .skip(offset)
        .take(page_size.get())
        .cloned()
        .collect()
}
