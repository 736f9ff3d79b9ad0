//! Data models for the library server

pub mod author;
pub mod book;
pub mod borrow;
pub mod category;
pub mod member;
pub mod params;
pub mod reservation;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookDetails};
pub use borrow::{Borrow, BorrowDetails};
pub use category::Category;
pub use member::{Member, MemberStatus};
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
