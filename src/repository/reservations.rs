//! Reservation records on the store

use chrono::NaiveDate;

use super::{projection::Project, Store};
use crate::{
    error::{AppError, AppResult},
    models::reservation::{Reservation, ReservationDetails, ReservationFilter, ReservationStatus},
};

impl Store {
    /// Get reservation by ID
    pub fn reservations_get(&self, id: i32) -> AppResult<&Reservation> {
        self.reservations
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Record a new active reservation
    pub fn reservations_create(
        &mut self,
        book_id: i32,
        member_id: i32,
        reservation_date: NaiveDate,
    ) -> Reservation {
        let reservation = Reservation {
            id: self.reservation_ids.next_id(),
            book_id,
            member_id,
            reservation_date,
            status: ReservationStatus::Active,
        };
        self.reservations.insert(reservation.id, reservation.clone());
        reservation
    }

    /// The active reservation of a book by a member, if any
    pub fn reservations_find_active(&self, book_id: i32, member_id: i32) -> Option<&Reservation> {
        self.reservations
            .values()
            .find(|r| r.book_id == book_id && r.member_id == member_id && r.is_active())
    }

    /// Overwrite the status of a reservation
    pub fn reservations_set_status(&mut self, id: i32, status: ReservationStatus) -> AppResult<Reservation> {
        let reservation = self
            .reservations
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Reservation {} not found", id)))?;

        reservation.status = status;
        Ok(reservation.clone())
    }

    /// Search reservations, joined with their book and member
    pub fn reservations_search(&self, filter: &ReservationFilter) -> Vec<ReservationDetails> {
        self.reservations
            .values()
            .filter(|r| filter.matches(r))
            .map(|r| r.project(self))
            .collect()
    }
}
