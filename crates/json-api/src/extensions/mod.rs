//! Extension traits

mod depot;
mod path;
mod query;
mod request;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use path::PathIdExt as _;
pub(crate) use query::{QueryValueExt as _, pagination};
pub(crate) use request::RequestExt as _;
pub(crate) use result::ResultExt as _;
