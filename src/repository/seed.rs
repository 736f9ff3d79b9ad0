//! Sample catalogue loaded into a fresh store

use chrono::NaiveDate;

use super::Store;
use crate::models::{book::NewBook, member::NewMember};

impl Store {
    /// A store populated with a few classics and one active member
    pub fn seeded(today: NaiveDate) -> Self {
        let mut store = Store::default();

        let fitzgerald = store.authors_create("F. Scott Fitzgerald");
        let orwell = store.authors_create("George Orwell");
        let lee = store.authors_create("Harper Lee");
        let salinger = store.authors_create("J.D. Salinger");

        let fiction = store.categories_create("Fiction");
        let classic = store.categories_create("Classic");
        let dystopian = store.categories_create("Dystopian");

        let books = [
            ("The Great Gatsby", "9780743273565", 1925, classic.id, fitzgerald.id, 3),
            ("1984", "9780451524935", 1949, dystopian.id, orwell.id, 2),
            ("To Kill a Mockingbird", "9780446310789", 1960, classic.id, lee.id, 4),
            ("The Catcher in the Rye", "9780316769488", 1951, classic.id, salinger.id, 1),
        ];
        for (title, isbn, year, category_id, author_id, copies) in books {
            store.insert_book(NewBook {
                title: title.to_string(),
                isbn: isbn.to_string(),
                publication_year: year,
                category_ids: vec![fiction.id, category_id],
                author_ids: vec![author_id],
                total_copies: copies,
            });
        }

        store.insert_member(
            NewMember {
                name: "Alice Example".to_string(),
                email: "alice@example.com".to_string(),
            },
            today,
        );

        tracing::debug!(
            "Seeded store with {} books, {} authors, {} categories",
            store.books.len(),
            store.authors.len(),
            store.categories.len()
        );

        store
    }
}
