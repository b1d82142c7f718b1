pub mod holding;
pub mod market;
pub mod snapshot;
