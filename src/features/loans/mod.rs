//! Loan products and applications: endpoints, types, and the view model the
//! dashboard and application screens render.

pub mod client;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;
pub mod view;

pub use view::LoanView;
