//! In-memory entity store
//!
//! `Store` owns every record and the per-entity id counters. Entity-specific
//! operations live in the submodules as `impl Store` blocks. `Repository`
//! shares one store behind a single lock: a service takes the write guard for
//! the whole of a mutation so that scan-then-act checks (isbn/email
//! uniqueness, copy counts, active reservations) cannot interleave.

pub mod authors;
pub mod availability;
pub mod books;
pub mod borrows;
pub mod categories;
pub mod members;
pub mod projection;
pub mod reservations;
pub mod seed;

use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Author, Book, Borrow, Category, Member, Reservation};

/// Monotonic id counter. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: i32,
}

impl IdSequence {
    pub fn next_id(&mut self) -> i32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

/// All library records, keyed by id in insertion order
#[derive(Debug, Default)]
pub struct Store {
    books: IndexMap<i32, Book>,
    members: IndexMap<i32, Member>,
    authors: IndexMap<i32, Author>,
    categories: IndexMap<i32, Category>,
    borrows: IndexMap<i32, Borrow>,
    reservations: IndexMap<i32, Reservation>,

    book_ids: IdSequence,
    member_ids: IdSequence,
    author_ids: IdSequence,
    category_ids: IdSequence,
    borrow_ids: IdSequence,
    reservation_ids: IdSequence,
}

/// Shared handle to the store
#[derive(Clone, Default)]
pub struct Repository {
    store: Arc<RwLock<Store>>,
}

impl Repository {
    /// Create a repository around an existing store
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Shared access for queries
    pub async fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().await
    }

    /// Exclusive access for mutations
    pub async fn write(&self) -> RwLockWriteGuard<'_, Store> {
        self.store.write().await
    }
}
