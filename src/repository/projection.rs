//! Denormalized views of store records.
//!
//! Each entity that is returned with its relations implements `Project`, so
//! every read path attaches the same related records the same way.

use super::Store;
use crate::models::{
    Book, BookDetails, Borrow, BorrowDetails, Reservation, ReservationDetails,
};

/// Attach related records from the store to an entity
pub trait Project {
    type View;

    fn project(&self, store: &Store) -> Self::View;
}

impl Project for Book {
    type View = BookDetails;

    fn project(&self, store: &Store) -> BookDetails {
        BookDetails {
            categories: self
                .category_ids
                .iter()
                .filter_map(|id| store.categories.get(id).cloned())
                .collect(),
            authors: self
                .author_ids
                .iter()
                .filter_map(|id| store.authors.get(id).cloned())
                .collect(),
            available_copies: store.available_copies(self.id),
            book: self.clone(),
        }
    }
}

impl Project for Borrow {
    type View = BorrowDetails;

    fn project(&self, store: &Store) -> BorrowDetails {
        BorrowDetails {
            borrow: self.clone(),
            book: store.books.get(&self.book_id).cloned(),
            member: store.members.get(&self.member_id).cloned(),
        }
    }
}

impl Project for Reservation {
    type View = ReservationDetails;

    fn project(&self, store: &Store) -> ReservationDetails {
        ReservationDetails {
            reservation: self.clone(),
            book: store.books.get(&self.book_id).cloned(),
            member: store.members.get(&self.member_id).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::NewBook;

    #[test]
    fn test_book_projection_drops_unknown_relations() {
        let mut store = Store::default();
        let author = store.authors_create("Harper Lee");
        let book = store
            .books_create(NewBook {
                title: "To Kill a Mockingbird".into(),
                isbn: "9780446310789".into(),
                publication_year: 1960,
                category_ids: vec![42],
                author_ids: vec![author.id, 99],
                total_copies: 4,
            })
            .unwrap();

        let details = book.project(&store);
        assert_eq!(details.authors, vec![author]);
        assert!(details.categories.is_empty());
        assert_eq!(details.available_copies, 4);

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["book_id"], book.id);
        assert_eq!(value["title"], "To Kill a Mockingbird");
        assert_eq!(value["available_copies"], 4);
    }
}
