//! Album grid paging
//!
//! Paging is a view concern: changing page never touches the playback session.

use std::ops::Range;

/// Slice of the catalog shown on `page_index`. Empty once the page starts past the end.
pub fn visible_slice(page_index: usize, page_size: usize, total: usize) -> Range<usize> {
    let start = page_index.saturating_mul(page_size);
    if start >= total {
        return total..total;
    }
    start..start.saturating_add(page_size).min(total)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagingState {
    page_index: usize,
    page_size: usize,
}

impl PagingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Store `page` if it is non-negative. Pages past the end are accepted and
    /// simply render empty.
    pub fn go_to_page(&mut self, page: isize) -> bool {
        match usize::try_from(page) {
            Ok(page) => {
                self.page_index = page;
                true
            }
            Err(_) => false,
        }
    }

    pub fn next_page(&mut self, total: usize) -> bool {
        if self.page_index + 1 >= self.page_count(total) {
            return false;
        }
        self.page_index += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.page_index -= 1;
        true
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn page_of(&self, album_index: usize) -> usize {
        album_index / self.page_size
    }

    pub fn visible(&self, total: usize) -> Range<usize> {
        visible_slice(self.page_index, self.page_size, total)
    }
}
