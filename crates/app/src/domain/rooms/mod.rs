//! Rooms

pub mod data;
mod errors;
pub mod records;
pub(crate) mod repository;
mod service;

pub use errors::RoomsServiceError;
pub use service::*;
