//! Customer endpoints. Listing and approval are admin-only on the backend.

use crate::{
    app_lib::{ApiClient, AppError, MessageResponse, RequestOptions},
    features::customers::types::{CustomerProfile, RegistrationForm},
};

impl ApiClient {
    /// Submits a registration as multipart form data.
    /// The password fields are part of the form and must never be logged.
    pub async fn register_customer(
        &self,
        form: &RegistrationForm,
    ) -> Result<MessageResponse, AppError> {
        self.request_multipart("/customers/register/", form.to_multipart()?, None).await
    }

    /// Fetches the profile of the logged-in customer.
    pub async fn get_current_customer(&self) -> Result<CustomerProfile, AppError> {
        self.request("/customers/me/", RequestOptions::get()).await
    }

    /// Lists every registered customer.
    pub async fn list_customers(&self) -> Result<Vec<CustomerProfile>, AppError> {
        self.request("/customers/", RequestOptions::get()).await
    }

    /// Approves a pending customer; the backend creates the login and mails it.
    pub async fn approve_customer(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.request(&format!("/customers/{id}/approve/"), RequestOptions::post())
            .await
    }
}
