//! Hotels Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{RepositoryError, page_bounds},
    domain::{
        hotels::{
            data::{HotelFilter, NewHotel},
            records::{HotelRecord, HotelUuid},
        },
        rooms::records::RoomUuid,
    },
    pagination::Pagination,
};

const CREATE_HOTEL_SQL: &str = include_str!("sql/create_hotel.sql");
const GET_HOTEL_SQL: &str = include_str!("sql/get_hotel.sql");
const LIST_HOTELS_SQL: &str = include_str!("sql/list_hotels.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgHotelsRepository {
    pool: PgPool,
}

impl PgHotelsRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for HotelRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i16 = row.try_get("rating")?;
        let rooms: Vec<Uuid> = row.try_get("rooms")?;

        Ok(Self {
            uuid: HotelUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            location: row.try_get("location")?,
            rating: u8::try_from(rating).map_err(|error| sqlx::Error::ColumnDecode {
                index: "rating".to_string(),
                source: Box::new(error),
            })?,
            rooms: rooms.into_iter().map(RoomUuid::from_uuid).collect(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl HotelsRepository for PgHotelsRepository {
    async fn create_hotel(
        &self,
        uuid: HotelUuid,
        hotel: NewHotel,
    ) -> Result<HotelRecord, RepositoryError> {
        query_as::<Postgres, HotelRecord>(CREATE_HOTEL_SQL)
            .bind(uuid.into_uuid())
            .bind(hotel.name)
            .bind(hotel.location)
            .bind(i16::from(hotel.rating))
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, RepositoryError> {
        query_as::<Postgres, HotelRecord>(GET_HOTEL_SQL)
            .bind(hotel.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_hotels(
        &self,
        filter: HotelFilter,
        pagination: Pagination,
    ) -> Result<Vec<HotelRecord>, RepositoryError> {
        let (limit, offset) = page_bounds(pagination);

        query_as::<Postgres, HotelRecord>(LIST_HOTELS_SQL)
            .bind(filter.rating.map(i16::from))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub(crate) trait HotelsRepository: Send + Sync {
    async fn create_hotel(
        &self,
        uuid: HotelUuid,
        hotel: NewHotel,
    ) -> Result<HotelRecord, RepositoryError>;

    /// Fetch a hotel together with the ids of its rooms.
    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, RepositoryError>;

    async fn list_hotels(
        &self,
        filter: HotelFilter,
        pagination: Pagination,
    ) -> Result<Vec<HotelRecord>, RepositoryError>;
}
