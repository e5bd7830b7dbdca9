//! Bookings service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::{
    auth::{Caller, policy},
    domain::bookings::{
        availability::is_available,
        data::{BookingFilter, NewBooking},
        errors::BookingsServiceError,
        locks::RoomLocks,
        records::{BookingRecord, BookingUuid},
        repository::{BookingsRepository, PgBookingsRepository},
    },
    pagination::Pagination,
};

#[derive(Clone)]
pub struct BookingsManager {
    repository: Arc<dyn BookingsRepository>,
    locks: Arc<RoomLocks>,
}

impl std::fmt::Debug for BookingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingsManager")
            .field("locks", &self.locks)
            .finish_non_exhaustive()
    }
}

impl BookingsManager {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgBookingsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn BookingsRepository>) -> Self {
        Self {
            repository,
            locks: Arc::default(),
        }
    }

    async fn find_accessible(
        &self,
        caller: Caller,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let booking = self.repository.get_booking(booking).await?;

        if !policy::can_access_booking(caller, &booking) {
            debug!(booking = %booking.uuid, caller = %caller.uuid, "booking access denied");

            return Err(BookingsServiceError::Unauthorized);
        }

        Ok(booking)
    }
}

#[async_trait]
impl BookingsService for BookingsManager {
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        booking.validate(Timestamp::now())?;

        // Held until the insert lands so no other request for this room
        // can pass the availability check in between.
        let _room = self.locks.lock(booking.room_uuid).await;

        let existing = self
            .repository
            .list_room_bookings(booking.room_uuid)
            .await?;

        if !is_available(&existing, booking.stay()) {
            info!(
                room = %booking.room_uuid,
                from = %booking.from_date,
                till = %booking.till_date,
                "booking.rejected"
            );

            return Err(BookingsServiceError::AlreadyBooked);
        }

        let created = self
            .repository
            .create_booking(BookingUuid::new(), booking)
            .await?;

        info!(
            booking = %created.uuid,
            room = %created.room_uuid,
            user = %created.user_uuid,
            "booking.created"
        );

        Ok(created)
    }

    async fn get_booking(
        &self,
        caller: Caller,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        self.find_accessible(caller, booking).await
    }

    async fn list_bookings(
        &self,
        caller: Caller,
        filter: BookingFilter,
        pagination: Pagination,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let own_bookings = filter.user_uuid == Some(caller.uuid);

        if !policy::can_list_bookings(caller) && !own_bookings {
            return Err(BookingsServiceError::Unauthorized);
        }

        Ok(self.repository.list_bookings(filter, pagination).await?)
    }

    async fn cancel_booking(
        &self,
        caller: Caller,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let booking = self.find_accessible(caller, booking).await?;

        let canceled = self.repository.cancel_booking(booking.uuid).await?;

        info!(booking = %canceled.uuid, canceled_by = %caller.uuid, "booking.canceled");

        Ok(canceled)
    }
}

#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Reserve a room if no active booking overlaps the requested stay.
    async fn create_booking(
        &self,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieve a booking the caller owns, or any booking for admins.
    async fn get_booking(
        &self,
        caller: Caller,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Retrieve a page of bookings. Non-admins may only list their own.
    async fn list_bookings(
        &self,
        caller: Caller,
        filter: BookingFilter,
        pagination: Pagination,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Cancel a booking. Canceling an already canceled booking succeeds.
    async fn cancel_booking(
        &self,
        caller: Caller,
        booking: BookingUuid,
    ) -> Result<BookingRecord, BookingsServiceError>;
}
