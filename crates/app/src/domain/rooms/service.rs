//! Rooms service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    domain::rooms::{
        data::{NewRoom, RoomFilter},
        errors::RoomsServiceError,
        records::{RoomRecord, RoomUuid},
        repository::{PgRoomsRepository, RoomsRepository},
    },
    pagination::Pagination,
};

#[derive(Clone)]
pub struct RoomsManager {
    repository: Arc<dyn RoomsRepository>,
}

impl std::fmt::Debug for RoomsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomsManager").finish_non_exhaustive()
    }
}

impl RoomsManager {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgRoomsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn RoomsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl RoomsService for RoomsManager {
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError> {
        room.validate()?;

        let created = self.repository.create_room(RoomUuid::new(), room).await?;

        info!(room = %created.uuid, hotel = %created.hotel_uuid, "room.created");

        Ok(created)
    }

    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RoomsServiceError> {
        Ok(self.repository.get_room(room).await?)
    }

    async fn list_rooms(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<RoomRecord>, RoomsServiceError> {
        Ok(self.repository.list_rooms(filter, pagination).await?)
    }
}

#[automock]
#[async_trait]
pub trait RoomsService: Send + Sync {
    /// Add a room to an existing hotel.
    async fn create_room(&self, room: NewRoom) -> Result<RoomRecord, RoomsServiceError>;

    async fn get_room(&self, room: RoomUuid) -> Result<RoomRecord, RoomsServiceError>;

    /// Retrieve a page of rooms, optionally limited to one hotel or size.
    async fn list_rooms(
        &self,
        filter: RoomFilter,
        pagination: Pagination,
    ) -> Result<Vec<RoomRecord>, RoomsServiceError>;
}
