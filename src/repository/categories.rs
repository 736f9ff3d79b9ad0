//! Category operations on the store

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::Category,
};

impl Store {
    /// List all categories
    pub fn categories_list(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    /// Get category by ID
    pub fn categories_get(&self, id: i32) -> AppResult<&Category> {
        self.categories
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Create category
    pub fn categories_create(&mut self, name: &str) -> Category {
        let category = Category {
            id: self.category_ids.next_id(),
            name: name.to_string(),
        };
        self.categories.insert(category.id, category.clone());
        category
    }
}
