//! Test support shared by service tests.


pub(crate) use context::TestContext;
