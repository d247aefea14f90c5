//! Auth endpoints. The backend answers login with a session cookie that later
//! calls replay; the password is only ever sent in the login body and must
//! never be logged.

use crate::{
    app_lib::{ApiClient, AppError, MessageResponse, RequestOptions},
    features::auth::types::{LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Authenticates with username and password.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AppError> {
        let options = RequestOptions::post().json(&LoginRequest { username, password })?;
        self.request("/auth/login/", options).await
    }

    /// Clears the current session on the server.
    pub async fn logout(&self) -> Result<MessageResponse, AppError> {
        self.request("/auth/logout/", RequestOptions::post()).await
    }
}
