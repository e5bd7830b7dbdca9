//! Authentication and authorization

mod caller;
mod errors;
mod models;
mod password;
pub mod policy;
mod service;
mod token;

pub use caller::*;
pub use errors::*;
pub use models::*;
pub use password::*;
pub use service::*;
pub use token::*;
