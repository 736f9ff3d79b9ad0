//! Borrow and return service

use crate::{
    error::{AppError, AppResult},
    models::borrow::{Borrow, BorrowDetails, BorrowFilter, BorrowRequest},
    repository::Repository,
};

use super::today;

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Borrow a copy of a book.
    ///
    /// The member must be active and the book must have a copy left. All
    /// checks and the insert happen under one write guard.
    pub async fn borrow(&self, request: &BorrowRequest) -> AppResult<Borrow> {
        let (book_id, member_id) = request.require()?;
        let mut store = self.repository.write().await;

        store.books_get(book_id)?;
        let member = store.members_get(member_id)?;
        if !member.status.is_active() {
            tracing::warn!("Borrow refused: member {} is {}", member_id, member.status);
            return Err(AppError::InvalidState("Member is not active".to_string()));
        }

        if store.available_copies(book_id) <= 0 {
            tracing::warn!("Borrow refused: no copies of book {} left", book_id);
            return Err(AppError::Conflict("No available copies for this book".to_string()));
        }

        let borrow = store.borrows_create(book_id, member_id, today());
        tracing::info!("Borrow {} created: book {} by member {}", borrow.id, book_id, member_id);
        Ok(borrow)
    }

    /// Return the member's active borrow of a book
    pub async fn return_book(&self, request: &BorrowRequest) -> AppResult<Borrow> {
        let (book_id, member_id) = request.require()?;
        let mut store = self.repository.write().await;

        let borrow_id = store
            .borrows_find_active(book_id, member_id)
            .map(|b| b.id)
            .ok_or_else(|| AppError::NotFound("Active borrow not found".to_string()))?;

        let borrow = store.borrows_mark_returned(borrow_id, today())?;
        tracing::info!("Borrow {} returned: book {} by member {}", borrow.id, book_id, member_id);
        Ok(borrow)
    }

    /// Search borrows with filters
    pub async fn search_borrows(&self, filter: &BorrowFilter) -> AppResult<Vec<BorrowDetails>> {
        let borrows = self.repository.read().await.borrows_search(filter);
        tracing::debug!("Borrow search {:?} matched {} borrows", filter, borrows.len());
        Ok(borrows)
    }

    /// Borrows of one member; the filter must already be scoped to that member
    pub async fn member_borrows(&self, member_id: i32, filter: &BorrowFilter) -> AppResult<Vec<BorrowDetails>> {
        let store = self.repository.read().await;
        store.members_get(member_id)?;
        let borrows = store.borrows_search(filter);
        tracing::debug!("Member {} has {} borrows matching {:?}", member_id, borrows.len(), filter);
        Ok(borrows)
    }
}
