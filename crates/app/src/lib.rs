//! Hotel reservation domain, authentication and persistence.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod pagination;
pub mod uuids;

#[cfg(test)]
mod test;
