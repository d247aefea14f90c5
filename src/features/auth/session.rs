//! Client-side session: the user returned by the last successful login,
//! mirrored to persistent storage so a reload keeps the user signed in. The
//! cached user is only ever replaced by a login response or cleared by logout.

use crate::{
    app_lib::{
        ActionOutcome, ApiClient, AppError, MessageResponse, navigation::Navigator,
        storage::Storage,
    },
    features::{
        auth::types::{LoginResponse, User},
        customers::types::RegistrationForm,
    },
};
use tracing::{debug, error, info, warn};

/// Storage key holding the JSON-serialized user.
pub const SESSION_STORAGE_KEY: &str = "currentUser";
/// Destination after logout.
pub const LOGIN_PATH: &str = "/login";

/// Submits a registration. The account stays pending until an operator
/// approves it, so the session is not touched.
pub async fn register_customer(
    api: &ApiClient,
    form: &RegistrationForm,
) -> ActionOutcome<String> {
    api.register_customer(form)
        .await
        .map(|response| {
            response
                .message
                .unwrap_or_else(|| "Registration submitted.".to_string())
        })
        .into()
}

pub struct SessionStore<S, N> {
    api: ApiClient,
    storage: S,
    navigator: N,
    current_user: Option<User>,
}

impl<S: Storage, N: Navigator> SessionStore<S, N> {
    /// Builds the store and restores a cached user without touching the network.
    pub fn new(api: ApiClient, storage: S, navigator: N) -> Self {
        let mut store = Self {
            api,
            storage,
            navigator,
            current_user: None,
        };
        store.check_login_status();
        store
    }

    /// Reloads the cached user from storage. Returns whether one was found.
    pub fn check_login_status(&mut self) -> bool {
        let stored = match self.storage.get(SESSION_STORAGE_KEY) {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "Failed to read cached session");
                None
            }
        };

        let Some(raw) = stored else {
            return false;
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                debug!(username = %user.username, "Restored cached session");
                self.current_user = Some(user);
                true
            }
            Err(err) => {
                warn!(error = %err, "Discarding unreadable cached session");
                if let Err(err) = self.storage.remove(SESSION_STORAGE_KEY) {
                    warn!(error = %err, "Failed to clear cached session");
                }
                false
            }
        }
    }

    /// Logs in and caches the returned user. Never fails; errors become a
    /// failure outcome carrying the server message.
    pub async fn login(&mut self, username: &str, password: &str) -> ActionOutcome<User> {
        let result = self.api.login(username, password).await;
        self.apply_login(result)
    }

    /// Applies a login response to the cache.
    pub fn apply_login(&mut self, result: Result<LoginResponse, AppError>) -> ActionOutcome<User> {
        match result {
            Ok(response) => {
                let user = response.user;
                self.persist(&user);
                info!(username = %user.username, admin = user.is_admin, "Logged in");
                self.current_user = Some(user.clone());
                ActionOutcome::Success(user)
            }
            Err(err) => ActionOutcome::failure(err.to_string()),
        }
    }

    /// Logs out, clears the cache and navigates to the login page. Failures are
    /// logged and leave the session untouched.
    pub async fn logout(&mut self) {
        let result = self.api.logout().await;
        self.apply_logout(result);
    }

    /// Applies a logout response. Returns whether the session was cleared.
    pub fn apply_logout(&mut self, result: Result<MessageResponse, AppError>) -> bool {
        if let Err(err) = result {
            error!(error = %err, "Logout failed");
            return false;
        }

        self.current_user = None;
        if let Err(err) = self.storage.remove(SESSION_STORAGE_KEY) {
            warn!(error = %err, "Failed to clear cached session");
        }
        info!("Logged out");
        self.navigator.redirect(LOGIN_PATH);
        true
    }

    /// Submits a customer registration. Success carries the server message.
    pub async fn register(&self, form: &RegistrationForm) -> ActionOutcome<String> {
        register_customer(&self.api, form).await
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().is_some_and(|user| user.is_admin)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    fn persist(&self, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(|err| AppError::Serialization(err.to_string()))
            .and_then(|raw| self.storage.set(SESSION_STORAGE_KEY, &raw));
        if let Err(err) = result {
            warn!(error = %err, "Failed to cache session");
        }
    }
}
