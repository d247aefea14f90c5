//! Domain-level features (auth, customers, loans, admin review) and their shared
//! logic. Routes import these modules to keep view code focused while keeping
//! session and API handling in dedicated feature areas.

pub mod admin;
pub mod auth;
pub mod customers;
pub mod loans;
