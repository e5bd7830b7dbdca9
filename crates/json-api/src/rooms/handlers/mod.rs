//! Room Handlers

pub(crate) mod book;
pub(crate) mod index;
