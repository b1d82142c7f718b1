pub mod synthetic;
pub mod traits;

// Upstream implementations
pub mod google;
pub mod yahoo;
