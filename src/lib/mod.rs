//! Shared client utilities for API access, configuration, errors, storage and
//! logging.
//!
//! ## Session Flow
//!
//! 1. **Login:** The client POSTs `{username, password}` to `/auth/login/`. The
//!    backend sets a session cookie and returns `{message, user}`.
//! 2. **Cache:** The `user` object is mirrored to `localStorage` under
//!    `currentUser` so a reload restores the session without a network call.
//! 3. **Logout:** The client POSTs to `/auth/logout/`, clears the cached user
//!    and navigates to the login page.
//!
//! Registration is a multipart POST to `/customers/register/`; the account
//! stays pending until an administrator approves it and the backend mails
//! credentials.
//!
//! Authorization is enforced by the backend; client-side checks are UX only.

pub mod api;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod navigation;
pub mod storage;
pub mod telemetry;

pub use api::{ApiClient, MessageResponse, RequestOptions};
pub use errors::{ActionOutcome, AppError};
