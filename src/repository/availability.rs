//! Available-copy accounting
//!
//! Availability is never stored: it is derived from the borrow collection on
//! every call, so it cannot drift from the borrows themselves.

use super::Store;

impl Store {
    /// Number of borrows of a book that have not been returned
    pub fn active_borrow_count(&self, book_id: i32) -> usize {
        self.borrows
            .values()
            .filter(|b| b.book_id == book_id && b.is_active())
            .count()
    }

    /// Whether any copy of the book is currently out
    pub fn has_active_borrow(&self, book_id: i32) -> bool {
        self.borrows
            .values()
            .any(|b| b.book_id == book_id && b.is_active())
    }

    /// `total_copies - active borrows`, or 0 for an unknown book.
    ///
    /// Can go negative when `total_copies` is lowered below the number of
    /// copies already out.
    pub fn available_copies(&self, book_id: i32) -> i64 {
        self.books.get(&book_id).map_or(0, |book| {
            i64::from(book.total_copies) - self.active_borrow_count(book_id) as i64
        })
    }
}
