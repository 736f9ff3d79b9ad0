//! Catalog service: books, authors and categories

use crate::{
    error::AppResult,
    models::{
        book::{Book, BookDetails, BookFilter, CreateBook, NewBook, UpdateBook},
        Author, Category,
    },
    repository::{projection::Project, Repository},
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search books with filters
    pub async fn search_books(&self, filter: &BookFilter) -> AppResult<Vec<BookDetails>> {
        let store = self.repository.read().await;
        let books = store.books_search(filter);
        tracing::debug!("Book search {:?} matched {} books", filter, books.len());
        Ok(books)
    }

    /// Get book by ID with authors, categories and availability
    pub async fn get_book(&self, id: i32) -> AppResult<BookDetails> {
        let store = self.repository.read().await;
        Ok(store.books_get(id)?.project(&store))
    }

    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let data = NewBook::try_from(data)?;
        let book = self.repository.write().await.books_create(data)?;
        tracing::info!("Book {} created: {} (isbn {})", book.id, book.title, book.isbn);
        Ok(book)
    }

    pub async fn update_book(&self, id: i32, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.write().await.books_update(id, data)?;
        tracing::info!("Book {} updated", id);
        Ok(book)
    }

    /// Delete a book; refused while any copy is still borrowed
    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.write().await.books_delete(id)?;
        tracing::info!("Book {} deleted", id);
        Ok(())
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        Ok(self.repository.read().await.authors_list())
    }

    pub async fn get_author(&self, id: i32) -> AppResult<Author> {
        Ok(self.repository.read().await.authors_get(id)?.clone())
    }

    /// Books written by an author
    pub async fn author_books(&self, author_id: i32) -> AppResult<Vec<Book>> {
        let store = self.repository.read().await;
        store.authors_get(author_id)?;
        Ok(store.books_by_author(author_id))
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.repository.read().await.categories_list())
    }

    pub async fn get_category(&self, id: i32) -> AppResult<Category> {
        Ok(self.repository.read().await.categories_get(id)?.clone())
    }

    /// Books filed under a category
    pub async fn category_books(&self, category_id: i32) -> AppResult<Vec<Book>> {
        let store = self.repository.read().await;
        store.categories_get(category_id)?;
        Ok(store.books_by_category(category_id))
    }
}
