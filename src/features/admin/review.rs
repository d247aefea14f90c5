//! Review actions for platform operators: approve customers, approve or reject
//! loan applications. Every action returns an outcome carrying the server
//! message so the screen can show why an approval was refused.

use crate::{
    app_lib::{ActionOutcome, ApiClient, AppError, MessageResponse},
    features::{
        customers::types::{CustomerProfile, CustomerStatus},
        loans::types::{LoanApplication, LoanStatus},
    },
};
use tracing::info;

fn into_outcome(
    result: Result<MessageResponse, AppError>,
    fallback: &str,
) -> ActionOutcome<String> {
    result
        .map(|response| response.message.unwrap_or_else(|| fallback.to_string()))
        .into()
}

pub async fn approve_customer(api: &ApiClient, id: i64) -> ActionOutcome<String> {
    let outcome = into_outcome(api.approve_customer(id).await, "Customer approved.");
    if outcome.is_success() {
        info!(customer = id, "Customer approved");
    }
    outcome
}

pub async fn approve_application(api: &ApiClient, id: i64) -> ActionOutcome<String> {
    let outcome = into_outcome(api.approve_loan_application(id).await, "Loan approved.");
    if outcome.is_success() {
        info!(application = id, "Application approved");
    }
    outcome
}

pub async fn reject_application(api: &ApiClient, id: i64) -> ActionOutcome<String> {
    let outcome = into_outcome(api.reject_loan_application(id).await, "Loan rejected.");
    if outcome.is_success() {
        info!(application = id, "Application rejected");
    }
    outcome
}

pub fn pending_customers(customers: &[CustomerProfile]) -> Vec<CustomerProfile> {
    customers
        .iter()
        .filter(|customer| customer.status == CustomerStatus::Pending)
        .cloned()
        .collect()
}

/// Applications that can still be approved or rejected and have an id to act on.
pub fn pending_applications(applications: &[LoanApplication]) -> Vec<LoanApplication> {
    applications
        .iter()
        .filter(|application| {
            application.status == LoanStatus::Pending && application.id.is_some()
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{into_outcome, pending_applications, pending_customers};
    use crate::{
        app_lib::{AppError, MessageResponse},
        features::{customers::types::CustomerProfile, loans::types::LoanApplication},
    };
    use serde_json::json;

    #[test]
    fn outcome_uses_server_message_or_fallback() {
        let outcome = into_outcome(
            Ok(MessageResponse {
                message: Some("Loan approved! Score: 72.40".to_string()),
            }),
            "Loan approved.",
        );
        assert_eq!(outcome.value().map(String::as_str), Some("Loan approved! Score: 72.40"));

        let outcome = into_outcome(Ok(MessageResponse::default()), "Loan approved.");
        assert_eq!(outcome.value().map(String::as_str), Some("Loan approved."));

        let outcome = into_outcome(
            Err(AppError::Http {
                status: 400,
                message: "Loan cannot be approved. Score: 41.00 (below threshold)".to_string(),
            }),
            "Loan approved.",
        );
        assert_eq!(
            outcome.error(),
            Some("Loan cannot be approved. Score: 41.00 (below threshold)")
        );
    }

    #[test]
    fn filters_items_awaiting_review() {
        let customers: Vec<CustomerProfile> = serde_json::from_value(json!([
            {"id": 1, "first_name": "A", "surname": "One", "status": "pending"},
            {"id": 2, "first_name": "B", "surname": "Two", "status": "approved"}
        ]))
        .unwrap();
        let pending = pending_customers(&customers);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 1);

        let applications: Vec<LoanApplication> = serde_json::from_value(json!([
            {"id": 5, "loan_type": 1, "requested_amount": "100.00", "status": "pending"},
            {"id": 6, "loan_type": 1, "requested_amount": "100.00", "status": "rejected"},
            {"loan_type": 1, "requested_amount": "100.00", "status": "pending"}
        ]))
        .unwrap();
        let pending = pending_applications(&applications);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, Some(5));
    }
}
