//! Reservation service
//!
//! Reservations are independent of borrows: reserving never checks
//! availability, and returning a book never fulfils a reservation.

use crate::{
    error::{AppError, AppResult},
    models::reservation::{
        CreateReservation, Reservation, ReservationDetails, ReservationFilter, ReservationStatus,
        UpdateReservation,
    },
    repository::Repository,
};

use super::today;

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reserve a book; at most one active reservation per book and member
    pub async fn reserve(&self, request: &CreateReservation) -> AppResult<Reservation> {
        let (book_id, member_id) = request.require()?;
        let mut store = self.repository.write().await;

        store.books_get(book_id)?;
        store.members_get(member_id)?;

        if store.reservations_find_active(book_id, member_id).is_some() {
            tracing::warn!(
                "Reservation refused: member {} already holds one for book {}",
                member_id,
                book_id
            );
            return Err(AppError::Conflict(
                "Active reservation for this book already exists".to_string(),
            ));
        }

        let reservation = store.reservations_create(book_id, member_id, today());
        tracing::info!(
            "Reservation {} created: book {} for member {}",
            reservation.id,
            book_id,
            member_id
        );
        Ok(reservation)
    }

    /// Soft-cancel a reservation. Cancelling twice is not an error.
    pub async fn cancel(&self, id: i32) -> AppResult<Reservation> {
        let reservation = self
            .repository
            .write()
            .await
            .reservations_set_status(id, ReservationStatus::Cancelled)?;
        tracing::info!("Reservation {} cancelled", id);
        Ok(reservation)
    }

    /// Overwrite the status with any non-empty value
    pub async fn update_status(&self, id: i32, data: UpdateReservation) -> AppResult<Reservation> {
        let mut store = self.repository.write().await;

        match data.status.filter(|s| !s.is_empty()) {
            Some(status) => {
                let reservation = store.reservations_set_status(id, ReservationStatus::from(status))?;
                tracing::info!("Reservation {} set to {}", id, reservation.status);
                Ok(reservation)
            }
            None => Ok(store.reservations_get(id)?.clone()),
        }
    }

    /// Search reservations with filters
    pub async fn search_reservations(&self, filter: &ReservationFilter) -> AppResult<Vec<ReservationDetails>> {
        let reservations = self.repository.read().await.reservations_search(filter);
        tracing::debug!("Reservation search {:?} matched {} reservations", filter, reservations.len());
        Ok(reservations)
    }

    /// Reservations of one member; the filter must already be scoped to that member
    pub async fn member_reservations(
        &self,
        member_id: i32,
        filter: &ReservationFilter,
    ) -> AppResult<Vec<ReservationDetails>> {
        let store = self.repository.read().await;
        store.members_get(member_id)?;
        let reservations = store.reservations_search(filter);
        tracing::debug!(
            "Member {} has {} reservations matching {:?}",
            member_id,
            reservations.len(),
            filter
        );
        Ok(reservations)
    }
}
