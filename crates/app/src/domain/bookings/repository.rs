//! Bookings Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{RepositoryError, page_bounds},
    domain::{
        bookings::{
            data::{BookingFilter, NewBooking},
            records::{BookingRecord, BookingUuid},
        },
        rooms::records::RoomUuid,
        users::records::UserUuid,
    },
    pagination::Pagination,
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const GET_BOOKING_SQL: &str = include_str!("sql/get_booking.sql");
const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");
const LIST_ROOM_BOOKINGS_SQL: &str = include_str!("sql/list_room_bookings.sql");
const CANCEL_BOOKING_SQL: &str = include_str!("sql/cancel_booking.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgBookingsRepository {
    pool: PgPool,
}

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let num_persons: i32 = row.try_get("num_persons")?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            room_uuid: RoomUuid::from_uuid(row.try_get("room_uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            from_date: row.try_get::<SqlxTimestamp, _>("from_date")?.to_jiff(),
            till_date: row.try_get::<SqlxTimestamp, _>("till_date")?.to_jiff(),
            num_persons: u32::try_from(num_persons).map_err(|error| sqlx::Error::ColumnDecode {
                index: "num_persons".to_string(),
                source: Box::new(error),
            })?,
            canceled: row.try_get("canceled")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl BookingsRepository for PgBookingsRepository {
    async fn create_booking(
        &self,
        uuid: BookingUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, RepositoryError> {
        let num_persons =
            i32::try_from(booking.num_persons).map_err(|_overflow| RepositoryError::InvalidData)?;

        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(uuid.into_uuid())
            .bind(booking.room_uuid.into_uuid())
            .bind(booking.user_uuid.into_uuid())
            .bind(SqlxTimestamp::from(booking.from_date))
            .bind(SqlxTimestamp::from(booking.till_date))
            .bind(num_persons)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_booking(&self, booking: BookingUuid) -> Result<BookingRecord, RepositoryError> {
        query_as::<Postgres, BookingRecord>(GET_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_bookings(
        &self,
        filter: BookingFilter,
        pagination: Pagination,
    ) -> Result<Vec<BookingRecord>, RepositoryError> {
        let (limit, offset) = page_bounds(pagination);

        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_SQL)
            .bind(filter.user_uuid.map(UserUuid::into_uuid))
            .bind(filter.room_uuid.map(RoomUuid::into_uuid))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_room_bookings(
        &self,
        room: RoomUuid,
    ) -> Result<Vec<BookingRecord>, RepositoryError> {
        query_as::<Postgres, BookingRecord>(LIST_ROOM_BOOKINGS_SQL)
            .bind(room.into_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn cancel_booking(&self, booking: BookingUuid) -> Result<BookingRecord, RepositoryError> {
        query_as::<Postgres, BookingRecord>(CANCEL_BOOKING_SQL)
            .bind(booking.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub(crate) trait BookingsRepository: Send + Sync {
    /// Insert a booking. An unknown room surfaces as [`RepositoryError::InvalidReference`].
    async fn create_booking(
        &self,
        uuid: BookingUuid,
        booking: NewBooking,
    ) -> Result<BookingRecord, RepositoryError>;

    async fn get_booking(&self, booking: BookingUuid) -> Result<BookingRecord, RepositoryError>;

    async fn list_bookings(
        &self,
        filter: BookingFilter,
        pagination: Pagination,
    ) -> Result<Vec<BookingRecord>, RepositoryError>;

    /// Every booking ever made for `room`, canceled ones included.
    async fn list_room_bookings(
        &self,
        room: RoomUuid,
    ) -> Result<Vec<BookingRecord>, RepositoryError>;

    /// Mark a booking canceled. Canceling twice leaves it unchanged.
    async fn cancel_booking(&self, booking: BookingUuid) -> Result<BookingRecord, RepositoryError>;
}

#[cfg(test)]
mod tests {
    use jiff::{SignedDuration, Timestamp};
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    const BASE: Timestamp = Timestamp::constant(4_102_444_800, 0);

    fn stay(room: RoomUuid, user: UserUuid, from: i64, till: i64) -> NewBooking {
        NewBooking {
            room_uuid: room,
            user_uuid: user,
            from_date: BASE + SignedDuration::from_hours(24 * from),
            till_date: BASE + SignedDuration::from_hours(24 * till),
            num_persons: 2,
        }
    }

    async fn seeded() -> TestResult<(TestContext, PgBookingsRepository, RoomUuid, UserUuid)> {
        let ctx = TestContext::new().await?;
        let hotel = ctx.hotel(3).await?;
        let room = ctx.room(&hotel, "small").await?;
        let user = ctx.register("guest@foo.com", false).await?;
        let repository = PgBookingsRepository::new(ctx.db.pool().clone());

        Ok((ctx, repository, room.uuid, user.uuid))
    }

    #[tokio::test]
    async fn room_bookings_include_canceled_ones_in_date_order() -> TestResult {
        let (_ctx, repository, room, user) = seeded().await?;

        let later = repository
            .create_booking(BookingUuid::new(), stay(room, user, 5, 7))
            .await?;
        let earlier = repository
            .create_booking(BookingUuid::new(), stay(room, user, 1, 3))
            .await?;

        let canceled = repository.cancel_booking(earlier.uuid).await?;

        let bookings = repository.list_room_bookings(room).await?;

        assert_eq!(bookings, vec![canceled, later]);
        assert!(bookings.iter().any(|booking| booking.canceled));

        Ok(())
    }

    #[tokio::test]
    async fn stored_booking_round_trips() -> TestResult {
        let (_ctx, repository, room, user) = seeded().await?;
        let uuid = BookingUuid::new();

        let created = repository
            .create_booking(uuid, stay(room, user, 1, 3))
            .await?;

        assert_eq!(created.uuid, uuid);
        assert_eq!(created.from_date, BASE + SignedDuration::from_hours(24));
        assert_eq!(created.num_persons, 2);
        assert!(!created.canceled);
        assert_eq!(repository.get_booking(uuid).await?, created);

        Ok(())
    }

    #[tokio::test]
    async fn repeated_cancel_keeps_the_original_timestamp() -> TestResult {
        let (_ctx, repository, room, user) = seeded().await?;

        let booking = repository
            .create_booking(BookingUuid::new(), stay(room, user, 1, 3))
            .await?;

        let first = repository.cancel_booking(booking.uuid).await?;
        let second = repository.cancel_booking(booking.uuid).await?;

        assert!(second.canceled);
        assert_eq!(second.updated_at, first.updated_at);

        Ok(())
    }

    #[tokio::test]
    async fn cancel_of_missing_booking_is_not_found() -> TestResult {
        let (_ctx, repository, _room, _user) = seeded().await?;

        let result = repository.cancel_booking(BookingUuid::new()).await;

        assert!(
            matches!(result, Err(RepositoryError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn unknown_room_is_an_invalid_reference() -> TestResult {
        let (_ctx, repository, _room, user) = seeded().await?;

        let result = repository
            .create_booking(BookingUuid::new(), stay(RoomUuid::new(), user, 1, 3))
            .await;

        assert!(
            matches!(result, Err(RepositoryError::InvalidReference)),
            "expected InvalidReference, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn schema_rejects_reversed_stays_and_empty_parties() -> TestResult {
        let (_ctx, repository, room, user) = seeded().await?;

        let reversed = stay(room, user, 5, 3);
        let nobody = NewBooking {
            num_persons: 0,
            ..stay(room, user, 1, 3)
        };

        for booking in [reversed, nobody] {
            let result = repository
                .create_booking(BookingUuid::new(), booking.clone())
                .await;

            assert!(
                matches!(result, Err(RepositoryError::InvalidData)),
                "expected InvalidData for {booking:?}, got {result:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn list_filters_by_user_and_pages_with_limit_and_offset() -> TestResult {
        let (ctx, repository, room, user) = seeded().await?;
        let other = ctx.register("other@foo.com", false).await?;

        let mut own = Vec::new();

        for from in 0..4 {
            own.push(
                repository
                    .create_booking(BookingUuid::new(), stay(room, user, from * 2, from * 2 + 1))
                    .await?,
            );
        }

        repository
            .create_booking(BookingUuid::new(), stay(room, other.uuid, 20, 21))
            .await?;

        let filter = BookingFilter {
            user_uuid: Some(user),
            room_uuid: None,
        };

        let first_page = repository
            .list_bookings(filter, Pagination::new(Some(1), Some(3))?)
            .await?;
        let second_page = repository
            .list_bookings(filter, Pagination::new(Some(2), Some(3))?)
            .await?;

        assert_eq!(first_page.as_slice(), own.get(..3).unwrap_or_default());
        assert_eq!(second_page.as_slice(), own.get(3..).unwrap_or_default());

        let for_room = repository
            .list_bookings(
                BookingFilter {
                    user_uuid: None,
                    room_uuid: Some(room),
                },
                Pagination::default(),
            )
            .await?;

        assert_eq!(for_room.len(), 5);

        Ok(())
    }
}
