//! Bookings

pub mod availability;
pub mod data;
mod errors;
mod locks;
pub mod records;
pub(crate) mod repository;
mod service;

pub use errors::BookingsServiceError;
pub use service::*;
