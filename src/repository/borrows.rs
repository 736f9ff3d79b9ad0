//! Borrow records on the store
//!
//! These are raw record operations; the borrow/return preconditions are
//! enforced by `services::loans`.

use chrono::NaiveDate;

use super::{projection::Project, Store};
use crate::{
    error::{AppError, AppResult},
    models::borrow::{Borrow, BorrowDetails, BorrowFilter},
};

impl Store {
    /// Record a new active borrow
    pub fn borrows_create(&mut self, book_id: i32, member_id: i32, borrow_date: NaiveDate) -> Borrow {
        let borrow = Borrow {
            id: self.borrow_ids.next_id(),
            book_id,
            member_id,
            borrow_date,
            return_date: None,
        };
        self.borrows.insert(borrow.id, borrow.clone());
        borrow
    }

    /// First active borrow (in store order) of a book by a member
    pub fn borrows_find_active(&self, book_id: i32, member_id: i32) -> Option<&Borrow> {
        self.borrows
            .values()
            .find(|b| b.book_id == book_id && b.member_id == member_id && b.is_active())
    }

    /// Set the return date of a borrow
    pub fn borrows_mark_returned(&mut self, id: i32, return_date: NaiveDate) -> AppResult<Borrow> {
        let borrow = self
            .borrows
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Borrow {} not found", id)))?;

        if !borrow.is_active() {
            return Err(AppError::Conflict(format!("Borrow {} is already returned", id)));
        }

        borrow.return_date = Some(return_date);
        Ok(borrow.clone())
    }

    /// Search borrows, joined with their book and member
    pub fn borrows_search(&self, filter: &BorrowFilter) -> Vec<BorrowDetails> {
        self.borrows
            .values()
            .filter(|b| filter.matches(b))
            .map(|b| b.project(self))
            .collect()
    }
}
