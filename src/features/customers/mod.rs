//! Customer registration and profile endpoints.

pub mod client;
pub mod types;
