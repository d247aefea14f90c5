//! Auth feature covering login, logout and the cached session user. The
//! session store keeps authentication logic out of the UI. Passwords pass
//! through only as request bodies and must never be logged.
//!
//! Flow Overview: login posts credentials and caches the returned user;
//! a reload restores the cached user without a network call; logout clears
//! the cache and sends the browser to the login page.

pub mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub mod session;
#[cfg(target_arch = "wasm32")]
pub mod state;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub use guards::{RequireAdmin, RequireAuth};
pub use session::SessionStore;
