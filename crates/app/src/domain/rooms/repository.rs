//! Rooms Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::{
    database::{RepositoryError, page_bounds},
    domain::{
        hotels::records::HotelUuid,
        rooms::{
            data::{NewRoom, RoomFilter},
            records::{RoomRecord, RoomUuid},
        },
    },
    pagination::Pagination,
};

const CREATE_ROOM_SQL: &str = include_str!("sql/create_room.sql");
const GET_ROOM_SQL: &str = include_str!("sql/get_room.sql");
const LIST_ROOMS_SQL: &str = include_str!("sql/list_rooms.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgRoomsRepository {
    pool: PgPool,
}

impl PgRoomsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for RoomRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price: i64 = row.try_get("price")?;

        Ok(Self {
            uuid: RoomUuid::from_uuid(row.try_get("uuid")?),
            hotel_uuid: HotelUuid::from_uuid(row.try_get("hotel_uuid")?),
            size: row.try_get("size")?,
            price: u64::try_from(price).map_err(|error| sqlx::Error::ColumnDecode {
                index: "price".to_string(),
                source: Box::new(error),
            })?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl RoomsRepository for PgRoomsRepository {
    async fn create_room(
        &self,
        uuid: RoomUuid,
        room: NewRoom,
    ) -> Result<RoomRecord, RepositoryError> {
        let price = i64::try_from(room.price).map_err(|_overflow| RepositoryError::InvalidData)?;

        query_as::<Postgres, RoomRecord>(CREATE_ROOM_SQL)
            .bind(uuid.into_uuid())
            .bind(room.hotel_uuid.into_uuid())
            .bind(room.size)
            .bind(price)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RepositoryError> {
        query_as::<Postgres, RoomRecord>(GET_ROOM_SQL)
            .bind(room.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_rooms(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<RoomRecord>, RepositoryError> {
        let (limit, offset) = page_bounds(pagination);

        query_as::<Postgres, RoomRecord>(LIST_ROOMS_SQL)
            .bind(filter.hotel_uuid.map(HotelUuid::into_uuid))
            .bind(filter.size)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub(crate) trait RoomsRepository: Send + Sync {
    /// Insert a room. An unknown hotel surfaces as [`RepositoryError::InvalidReference`].
    async fn create_room(
        &self,
        uuid: RoomUuid,
        room: NewRoom,
    ) -> Result<RoomRecord, RepositoryError>;

    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RepositoryError>;

    async fn list_rooms(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<RoomRecord>, RepositoryError>;
}
