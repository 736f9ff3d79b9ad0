//! Author operations on the store

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::Author,
};

impl Store {
    /// List all authors
    pub fn authors_list(&self) -> Vec<Author> {
        self.authors.values().cloned().collect()
    }

    /// Get author by ID
    pub fn authors_get(&self, id: i32) -> AppResult<&Author> {
        self.authors
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Create author
    pub fn authors_create(&mut self, name: &str) -> Author {
        let author = Author {
            id: self.author_ids.next_id(),
            name: name.to_string(),
        };
        self.authors.insert(author.id, author.clone());
        author
    }
}
