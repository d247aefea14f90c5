//! Loan endpoints. The backend scopes the application list to the logged-in
//! customer, or returns every application for staff users.

use crate::{
    app_lib::{ApiClient, AppError, MessageResponse, RequestOptions},
    features::loans::types::{LoanApplication, LoanApplicationRequest, LoanType},
};

impl ApiClient {
    pub async fn get_loan_types(&self) -> Result<Vec<LoanType>, AppError> {
        self.request("/loan-types/", RequestOptions::get()).await
    }

    pub async fn get_loan_applications(&self) -> Result<Vec<LoanApplication>, AppError> {
        self.request("/loan-applications/", RequestOptions::get()).await
    }

    /// Submits a new application; status and score are assigned by the server.
    pub async fn submit_loan_application(
        &self,
        request: &LoanApplicationRequest,
    ) -> Result<LoanApplication, AppError> {
        let options = RequestOptions::post().json(request)?;
        self.request("/loan-applications/", options).await
    }

    /// Approves a pending application. The backend refuses scores below its
    /// threshold with a 400 and an explanatory `error`.
    pub async fn approve_loan_application(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.request(
            &format!("/loan-applications/{id}/approve/"),
            RequestOptions::post(),
        )
        .await
    }

    pub async fn reject_loan_application(&self, id: i64) -> Result<MessageResponse, AppError> {
        self.request(
            &format!("/loan-applications/{id}/reject/"),
            RequestOptions::post(),
        )
        .await
    }
}
