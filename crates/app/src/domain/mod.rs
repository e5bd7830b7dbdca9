//! Reservation Domain Concerns

pub mod bookings;
pub mod hotels;
pub mod rooms;
pub mod users;
