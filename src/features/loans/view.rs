//! Loan view model. Each load is one fetch-then-store pass: on success the
//! fetched list replaces the previous one, on failure the error is logged and
//! the previous state stays on screen. Components render the card, option,
//! row and stats models derived here, so formatting lives in one place.

use crate::{
    app_lib::{ActionOutcome, ApiClient},
    features::{
        customers::types::CustomerProfile,
        loans::types::{ApplicationForm, LoanApplication, LoanStatus, LoanType},
    },
};
use chrono::{DateTime, NaiveDate};
use tracing::{debug, error};

/// Label of the empty first option in the loan type select.
pub const LOAN_TYPE_PLACEHOLDER: &str = "Select Loan Type";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanTypeCard {
    pub id: i64,
    pub name: String,
    pub max_amount: String,
    pub interest_rate: String,
    pub duration: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoanTypeOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRow {
    pub key: String,
    pub loan_type_name: String,
    pub amount: String,
    pub status_class: String,
    pub status_label: String,
    pub date: String,
    pub score: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoanStats {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
}

pub fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Renders an ISO timestamp or date as `May 1, 2024`; anything else is shown raw.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return "-".to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{score:.1}/100"),
        None => "N/A".to_string(),
    }
}

pub fn loan_type_card(loan_type: &LoanType) -> LoanTypeCard {
    LoanTypeCard {
        id: loan_type.id,
        name: loan_type.name.clone(),
        max_amount: format_amount(loan_type.max_amount),
        interest_rate: format!("{:.2}%", loan_type.interest_rate),
        duration: format!("{} months", loan_type.duration_months),
        description: loan_type.description.clone(),
    }
}

/// Select options: the placeholder, then one per loan type keyed by id.
pub fn loan_type_options(loan_types: &[LoanType]) -> Vec<LoanTypeOption> {
    let placeholder = LoanTypeOption {
        value: String::new(),
        label: LOAN_TYPE_PLACEHOLDER.to_string(),
    };

    std::iter::once(placeholder)
        .chain(loan_types.iter().map(|loan_type| LoanTypeOption {
            value: loan_type.id.to_string(),
            label: format!(
                "{} (Max: {})",
                loan_type.name,
                format_amount(loan_type.max_amount)
            ),
        }))
        .collect()
}

pub fn application_row(index: usize, application: &LoanApplication) -> ApplicationRow {
    ApplicationRow {
        key: application
            .id
            .map_or_else(|| format!("row-{index}"), |id| id.to_string()),
        loan_type_name: application.loan_type_name.clone(),
        amount: format_amount(application.requested_amount),
        status_class: format!("status-{}", application.status),
        status_label: application.status.label(),
        date: format_date(application.application_date.as_deref()),
        score: format_score(application.approval_score),
    }
}

pub fn compute_stats(applications: &[LoanApplication]) -> LoanStats {
    let count = |status: &LoanStatus| {
        applications
            .iter()
            .filter(|application| &application.status == status)
            .count()
    };

    LoanStats {
        total: applications.len(),
        approved: count(&LoanStatus::Approved),
        pending: count(&LoanStatus::Pending),
    }
}

/// Fetches loan types, logging failures.
pub async fn fetch_loan_types(api: &ApiClient) -> Option<Vec<LoanType>> {
    match api.get_loan_types().await {
        Ok(loan_types) => Some(loan_types),
        Err(err) => {
            error!(error = %err, "Failed to load loan types");
            None
        }
    }
}

/// Fetches applications, logging failures.
pub async fn fetch_applications(api: &ApiClient) -> Option<Vec<LoanApplication>> {
    match api.get_loan_applications().await {
        Ok(applications) => Some(applications),
        Err(err) => {
            error!(error = %err, "Failed to load applications");
            None
        }
    }
}

/// Fetches the logged-in customer, logging failures.
pub async fn fetch_customer(api: &ApiClient) -> Option<CustomerProfile> {
    match api.get_current_customer().await {
        Ok(customer) => Some(customer),
        Err(err) => {
            error!(error = %err, "Failed to load dashboard");
            None
        }
    }
}

/// Parses and submits an application form. Never fails outright.
pub async fn submit_application(
    api: &ApiClient,
    form: &ApplicationForm,
) -> ActionOutcome<LoanApplication> {
    let request = match form.parse() {
        Ok(request) => request,
        Err(err) => return ActionOutcome::failure(err.to_string()),
    };
    api.submit_loan_application(&request).await.into()
}

/// Loan data for one screen, loaded through the injected client.
#[derive(Clone, Debug)]
pub struct LoanView {
    api: ApiClient,
    loan_types: Vec<LoanType>,
    applications: Vec<LoanApplication>,
    customer_name: Option<String>,
    stats: LoanStats,
}

impl LoanView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            loan_types: Vec::new(),
            applications: Vec::new(),
            customer_name: None,
            stats: LoanStats::default(),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Fetches loan types. Returns whether the list was replaced.
    pub async fn load_loan_types(&mut self) -> bool {
        match fetch_loan_types(&self.api).await {
            Some(loan_types) => {
                self.set_loan_types(loan_types);
                true
            }
            None => false,
        }
    }

    pub fn set_loan_types(&mut self, loan_types: Vec<LoanType>) {
        debug!(count = loan_types.len(), "Loan types loaded");
        self.loan_types = loan_types;
    }

    pub fn loan_types(&self) -> &[LoanType] {
        &self.loan_types
    }

    pub fn loan_type_cards(&self) -> Vec<LoanTypeCard> {
        self.loan_types.iter().map(loan_type_card).collect()
    }

    pub fn loan_type_options(&self) -> Vec<LoanTypeOption> {
        loan_type_options(&self.loan_types)
    }

    /// Fetches applications and recomputes the stats. Returns whether the list
    /// was replaced.
    pub async fn load_applications(&mut self) -> bool {
        match fetch_applications(&self.api).await {
            Some(applications) => {
                self.set_applications(applications);
                true
            }
            None => false,
        }
    }

    pub fn set_applications(&mut self, applications: Vec<LoanApplication>) {
        debug!(count = applications.len(), "Applications loaded");
        self.applications = applications;
        self.update_stats();
    }

    pub fn applications(&self) -> &[LoanApplication] {
        &self.applications
    }

    pub fn application_rows(&self) -> Vec<ApplicationRow> {
        self.applications
            .iter()
            .enumerate()
            .map(|(index, application)| application_row(index, application))
            .collect()
    }

    pub async fn submit_application(
        &self,
        form: &ApplicationForm,
    ) -> ActionOutcome<LoanApplication> {
        submit_application(&self.api, form).await
    }

    /// Recomputes total/approved/pending from the loaded applications.
    pub fn update_stats(&mut self) -> LoanStats {
        self.stats = compute_stats(&self.applications);
        self.stats
    }

    pub fn stats(&self) -> LoanStats {
        self.stats
    }

    /// Fetches the customer name, then the applications. A failed customer
    /// fetch skips the applications load. Returns whether both loads succeeded.
    pub async fn load_dashboard(&mut self) -> bool {
        let Some(customer) = fetch_customer(&self.api).await else {
            return false;
        };
        self.set_customer(&customer);
        self.load_applications().await
    }

    pub fn set_customer(&mut self, customer: &CustomerProfile) {
        self.customer_name = Some(customer.display_name());
    }

    pub fn customer_name(&self) -> Option<&str> {
        self.customer_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LOAN_TYPE_PLACEHOLDER, LoanStats, LoanView, application_row, compute_stats,
        format_date, format_score, loan_type_card, loan_type_options,
    };
    use crate::{
        app_lib::{ApiClient, config::AppConfig},
        features::loans::types::{LoanApplication, LoanStatus, LoanType},
    };

    fn loan_type(id: i64, name: &str, max_amount: f64) -> LoanType {
        LoanType {
            id,
            name: name.to_string(),
            max_amount,
            interest_rate: 7.5,
            duration_months: 24,
            description: "Unsecured".to_string(),
        }
    }

    fn application(status: &str) -> LoanApplication {
        LoanApplication {
            id: None,
            loan_type: 1,
            loan_type_name: "Personal".to_string(),
            requested_amount: 1500.5,
            purpose: "car".to_string(),
            credit_score: 700,
            status: LoanStatus::from(status.to_string()),
            application_date: Some("2024-05-01T09:30:00Z".to_string()),
            approval_score: None,
            approved_amount: None,
        }
    }

    #[test]
    fn stats_count_total_approved_and_pending() {
        let applications = vec![
            application("approved"),
            application("pending"),
            application("pending"),
        ];
        assert_eq!(
            compute_stats(&applications),
            LoanStats {
                total: 3,
                approved: 1,
                pending: 2
            }
        );
    }

    #[test]
    fn set_applications_recomputes_stats() {
        let api = ApiClient::new(&AppConfig::default()).unwrap();
        let mut view = LoanView::new(api);
        view.set_applications(vec![application("rejected"), application("approved")]);
        assert_eq!(
            view.stats(),
            LoanStats {
                total: 2,
                approved: 1,
                pending: 0
            }
        );
    }

    #[test]
    fn options_start_with_placeholder() {
        let options = loan_type_options(&[loan_type(3, "Auto", 20000.0)]);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, LOAN_TYPE_PLACEHOLDER);
        assert_eq!(options[1].value, "3");
        assert_eq!(options[1].label, "Auto (Max: $20000.00)");
    }

    #[test]
    fn card_formats_terms() {
        let card = loan_type_card(&loan_type(1, "Personal", 5000.0));
        assert_eq!(card.max_amount, "$5000.00");
        assert_eq!(card.interest_rate, "7.50%");
        assert_eq!(card.duration, "24 months");
    }

    #[test]
    fn row_formats_status_date_and_score() {
        let mut scored = application("approved");
        scored.id = Some(41);
        scored.approval_score = Some(71.27);

        let row = application_row(0, &scored);
        assert_eq!(row.key, "41");
        assert_eq!(row.amount, "$1500.50");
        assert_eq!(row.status_class, "status-approved");
        assert_eq!(row.status_label, "Approved");
        assert_eq!(row.date, "May 1, 2024");
        assert_eq!(row.score, "71.3/100");

        let row = application_row(4, &application("pending"));
        assert_eq!(row.key, "row-4");
        assert_eq!(row.score, "N/A");
    }

    #[test]
    fn date_falls_back_to_raw_or_dash() {
        assert_eq!(format_date(Some("2024-12-25")), "Dec 25, 2024");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_score(Some(0.0)), "0.0/100");
    }
}
