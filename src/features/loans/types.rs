//! Types for loan products, applications and the application form.

use crate::app_lib::{AppError, decimal};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoanType {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub max_amount: f64,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub interest_rate: f64,
    #[serde(default = "default_duration_months")]
    pub duration_months: u32,
    #[serde(default)]
    pub description: String,
}

fn default_duration_months() -> u32 {
    12
}

/// Application status. Values the client does not know are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Disbursed,
    Other(String),
}

impl LoanStatus {
    pub fn as_str(&self) -> &str {
        match self {
            LoanStatus::Pending => "pending",
            LoanStatus::Approved => "approved",
            LoanStatus::Rejected => "rejected",
            LoanStatus::Disbursed => "disbursed",
            LoanStatus::Other(value) => value,
        }
    }

    /// First letter upper-cased, the rest untouched.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for LoanStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => LoanStatus::Pending,
            "approved" => LoanStatus::Approved,
            "rejected" => LoanStatus::Rejected,
            "disbursed" => LoanStatus::Disbursed,
            _ => LoanStatus::Other(value),
        }
    }
}

impl From<LoanStatus> for String {
    fn from(status: LoanStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoanApplication {
    #[serde(default)]
    pub id: Option<i64>,
    pub loan_type: i64,
    #[serde(default)]
    pub loan_type_name: String,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub requested_amount: f64,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub credit_score: i64,
    #[serde(default)]
    pub status: LoanStatus,
    #[serde(default)]
    pub application_date: Option<String>,
    #[serde(default, deserialize_with = "decimal::deserialize_option")]
    pub approval_score: Option<f64>,
    #[serde(default, deserialize_with = "decimal::deserialize_option")]
    pub approved_amount: Option<f64>,
}

/// Body of `POST /loan-applications/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoanApplicationRequest {
    pub loan_type: i64,
    pub requested_amount: f64,
    pub purpose: String,
    pub credit_score: i64,
}

/// Raw application form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub loan_type: String,
    pub requested_amount: String,
    pub purpose: String,
    pub credit_score: String,
}

impl ApplicationForm {
    /// Parses the numeric fields.
    ///
    /// # Errors
    /// Returns `AppError::Validation` naming the first field that does not parse.
    pub fn parse(&self) -> Result<LoanApplicationRequest, AppError> {
        // Whole-field parses: "7.5" is not a credit score and "1500abc" is not
        // an amount. Neither is truncated to its numeric prefix.
        let loan_type = self
            .loan_type
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation("Please select a loan type.".to_string()))?;
        let requested_amount = self
            .requested_amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
            .ok_or_else(|| {
                AppError::Validation("Requested amount must be a number.".to_string())
            })?;
        let credit_score = self.credit_score.trim().parse::<i64>().map_err(|_| {
            AppError::Validation("Credit score must be a whole number.".to_string())
        })?;

        Ok(LoanApplicationRequest {
            loan_type,
            requested_amount,
            purpose: self.purpose.clone(),
            credit_score,
        })
    }
}
