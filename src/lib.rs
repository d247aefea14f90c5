//! Browser client for the Loandesk loan management API.
//!
//! The client core (request client, session store, loan view model) builds for
//! every target so it can be exercised natively against a mock server. The
//! Leptos view layer is compiled only for `wasm32`.

#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod features;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub use app::start;
