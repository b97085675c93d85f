//! Domain layer: pure, synchronous records and rules.

pub mod model;
pub mod stream;
pub mod traits;
