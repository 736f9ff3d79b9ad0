//! Business logic services

pub mod catalog;
pub mod loans;
pub mod members;
pub mod reservations;

use chrono::{NaiveDate, Utc};

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub members: members::MembersService,
    pub loans: loans::LoansService,
    pub reservations: reservations::ReservationsService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            catalog: catalog::CatalogService::new(repository.clone()),
            members: members::MembersService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository),
        }
    }
}

/// Current calendar date (UTC), used to stamp borrows, returns and reservations
pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
