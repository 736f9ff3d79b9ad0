//! Book operations on the store

use super::{projection::Project, Store};
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDetails, BookFilter, NewBook, UpdateBook},
};

impl Store {
    /// Get book by ID
    pub fn books_get(&self, id: i32) -> AppResult<&Book> {
        self.books
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    fn isbn_taken(&self, isbn: &str) -> bool {
        self.books.values().any(|b| b.isbn == isbn)
    }

    /// Insert without uniqueness checks
    pub(super) fn insert_book(&mut self, data: NewBook) -> Book {
        let book = Book {
            id: self.book_ids.next_id(),
            title: data.title,
            isbn: data.isbn,
            publication_year: data.publication_year,
            category_ids: data.category_ids,
            author_ids: data.author_ids,
            total_copies: data.total_copies,
        };
        self.books.insert(book.id, book.clone());
        book
    }

    /// Create a book, rejecting a duplicate ISBN
    pub fn books_create(&mut self, data: NewBook) -> AppResult<Book> {
        if self.isbn_taken(&data.isbn) {
            return Err(AppError::Conflict("Book with this ISBN already exists".to_string()));
        }
        Ok(self.insert_book(data))
    }

    /// Apply a partial update. An ISBN collision leaves the book untouched.
    pub fn books_update(&mut self, id: i32, data: UpdateBook) -> AppResult<Book> {
        let current = self.books_get(id)?;

        let new_isbn = data
            .isbn
            .filter(|isbn| !isbn.is_empty() && *isbn != current.isbn);
        if let Some(isbn) = &new_isbn {
            if self.isbn_taken(isbn) {
                return Err(AppError::Conflict("Another book with this ISBN exists".to_string()));
            }
        }

        let book = self
            .books
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        if let Some(isbn) = new_isbn {
            book.isbn = isbn;
        }
        if let Some(title) = data.title {
            book.title = title;
        }
        if let Some(year) = data.publication_year {
            book.publication_year = year;
        }
        if let Some(category_ids) = data.category_ids {
            book.category_ids = category_ids;
        }
        if let Some(author_ids) = data.author_ids {
            book.author_ids = author_ids;
        }
        if let Some(total_copies) = data.total_copies {
            book.total_copies = total_copies;
        }

        Ok(book.clone())
    }

    /// Delete a book unless one of its copies is still out
    pub fn books_delete(&mut self, id: i32) -> AppResult<()> {
        self.books_get(id)?;

        if self.has_active_borrow(id) {
            return Err(AppError::Conflict("Cannot delete book with active borrows".to_string()));
        }

        self.books.shift_remove(&id);
        Ok(())
    }

    /// Books listing the given author
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.books
            .values()
            .filter(|b| b.author_ids.contains(&author_id))
            .cloned()
            .collect()
    }

    /// Books filed under the given category
    pub fn books_by_category(&self, category_id: i32) -> Vec<Book> {
        self.books
            .values()
            .filter(|b| b.category_ids.contains(&category_id))
            .cloned()
            .collect()
    }

    /// Search books, each filter narrowing the joined result in turn
    pub fn books_search(&self, filter: &BookFilter) -> Vec<BookDetails> {
        let mut books: Vec<BookDetails> = self.books.values().map(|b| b.project(self)).collect();

        if let Some(title) = &filter.title {
            let needle = title.to_lowercase();
            books.retain(|b| b.book.title.to_lowercase().contains(&needle));
        }

        if let Some(author) = &filter.author {
            let needle = author.to_lowercase();
            books.retain(|b| b.authors.iter().any(|a| a.name.to_lowercase().contains(&needle)));
        }

        if let Some(isbn) = &filter.isbn {
            books.retain(|b| &b.book.isbn == isbn);
        }

        if let Some(category) = &filter.category {
            let needle = category.to_lowercase();
            books.retain(|b| b.categories.iter().any(|c| c.name.to_lowercase().contains(&needle)));
        }

        if let Some(year) = filter.year {
            books.retain(|b| b.book.publication_year == year);
        }

        if let Some(available) = filter.available {
            books.retain(|b| (b.available_copies > 0) == available);
        }

        books
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn new_book(title: &str, isbn: &str) -> NewBook {
        NewBook {
            title: title.into(),
            isbn: isbn.into(),
            publication_year: 2001,
            category_ids: vec![],
            author_ids: vec![],
            total_copies: 1,
        }
    }

    #[test]
    fn test_duplicate_isbn_rejected() {
        let mut store = Store::default();
        store.books_create(new_book("A", "111")).unwrap();

        let result = store.books_create(new_book("B", "111"));
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.books_search(&BookFilter::default()).len(), 1);
    }

    #[test]
    fn test_update_isbn_collision_leaves_book_unchanged() {
        let mut store = Store::default();
        let a = store.books_create(new_book("A", "111")).unwrap();
        store.books_create(new_book("B", "222")).unwrap();

        let result = store.books_update(
            a.id,
            UpdateBook {
                title: Some("Renamed".into()),
                isbn: Some("222".into()),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(store.books_get(a.id).unwrap(), &a);
    }

    #[test]
    fn test_update_same_isbn_is_allowed() {
        let mut store = Store::default();
        let a = store.books_create(new_book("A", "111")).unwrap();

        let updated = store
            .books_update(
                a.id,
                UpdateBook {
                    isbn: Some("111".into()),
                    total_copies: Some(4),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.total_copies, 4);
    }

    #[test]
    fn test_update_missing_book() {
        let mut store = Store::default();
        let result = store.books_update(5, UpdateBook::default());
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_blocked_by_active_borrow() {
        let mut store = Store::default();
        let day = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let book = store.books_create(new_book("A", "111")).unwrap();
        let borrow = store.borrows_create(book.id, 1, day);

        assert!(matches!(store.books_delete(book.id), Err(AppError::Conflict(_))));

        store.borrows_mark_returned(borrow.id, day).unwrap();
        store.books_delete(book.id).unwrap();
        assert!(store.books_get(book.id).is_err());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = Store::default();
        let a = store.books_create(new_book("A", "111")).unwrap();
        store.books_delete(a.id).unwrap();

        let b = store.books_create(new_book("B", "222")).unwrap();
        assert_eq!(b.id, a.id + 1);
    }

    #[test]
    fn test_search_filters_compose() {
        let mut store = Store::default();
        let orwell = store.authors_create("George Orwell");
        let dystopian = store.categories_create("Dystopian");

        store
            .books_create(NewBook {
                author_ids: vec![orwell.id],
                category_ids: vec![dystopian.id],
                publication_year: 1949,
                ..new_book("1984", "111")
            })
            .unwrap();
        store
            .books_create(NewBook {
                author_ids: vec![orwell.id],
                publication_year: 1945,
                ..new_book("Animal Farm", "222")
            })
            .unwrap();

        let by_author = store.books_search(&BookFilter {
            author: Some("orwell".into()),
            ..Default::default()
        });
        assert_eq!(by_author.len(), 2);

        let narrowed = store.books_search(&BookFilter {
            author: Some("ORWELL".into()),
            category: Some("dysto".into()),
            ..Default::default()
        });
        assert_eq!(narrowed.len(), 1);
        assert_eq!(narrowed[0].book.title, "1984");
        assert_eq!(narrowed[0].authors[0].name, "George Orwell");

        let by_year = store.books_search(&BookFilter {
            year: Some(1945),
            title: Some("farm".into()),
            ..Default::default()
        });
        assert_eq!(by_year.len(), 1);
    }

    #[test]
    fn test_search_by_availability() {
        let mut store = Store::default();
        let day = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let a = store.books_create(new_book("A", "111")).unwrap();
        store.books_create(new_book("B", "222")).unwrap();
        store.borrows_create(a.id, 1, day);

        let unavailable = store.books_search(&BookFilter {
            available: Some(false),
            ..Default::default()
        });
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].book.id, a.id);
        assert_eq!(unavailable[0].available_copies, 0);

        let available = store.books_search(&BookFilter {
            available: Some(true),
            ..Default::default()
        });
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].book.isbn, "222");
    }
}
