//! Hotels service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    domain::hotels::{
        data::{HotelFilter, NewHotel},
        errors::HotelsServiceError,
        records::{HotelRecord, HotelUuid},
        repository::{HotelsRepository, PgHotelsRepository},
    },
    pagination::Pagination,
};

#[derive(Clone)]
pub struct HotelsManager {
    repository: Arc<dyn HotelsRepository>,
}

impl std::fmt::Debug for HotelsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelsManager").finish_non_exhaustive()
    }
}

impl HotelsManager {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgHotelsRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn HotelsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HotelsService for HotelsManager {
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, HotelsServiceError> {
        hotel.validate()?;

        let created = self.repository.create_hotel(HotelUuid::new(), hotel).await?;

        info!(hotel = %created.uuid, name = %created.name, "hotel.created");

        Ok(created)
    }

    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, HotelsServiceError> {
        Ok(self.repository.get_hotel(hotel).await?)
    }

    async fn list_hotels(
        &self,
        filter: HotelFilter,
        pagination: Pagination,
    ) -> Result<Vec<HotelRecord>, HotelsServiceError> {
        Ok(self.repository.list_hotels(filter, pagination).await?)
    }
}

#[automock]
#[async_trait]
pub trait HotelsService: Send + Sync {
    async fn create_hotel(&self, hotel: NewHotel) -> Result<HotelRecord, HotelsServiceError>;

    async fn get_hotel(&self, hotel: HotelUuid) -> Result<HotelRecord, HotelsServiceError>;

    /// Retrieve a page of hotels, optionally filtered by rating.
    async fn list_hotels(
        &self,
        filter: HotelFilter,
        pagination: Pagination,
    ) -> Result<Vec<HotelRecord>, HotelsServiceError>;
}
