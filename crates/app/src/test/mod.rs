//! Shared test fixtures.


pub(crate) use context::TestContext;
pub(crate) use db::TestDb;
