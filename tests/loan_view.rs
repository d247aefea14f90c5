use anyhow::Result;
use loandesk_web::{
    app_lib::{ApiClient, config::AppConfig},
    features::loans::{LoanView, types::ApplicationForm, view::LoanStats},
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> Result<ApiClient> {
    let config = AppConfig {
        api_base_url: format!("{}/api", server.uri()),
        ..AppConfig::default()
    };
    Ok(ApiClient::new(&config)?)
}

fn application(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "loan_type": 2,
        "loan_type_name": "Car Loan",
        "requested_amount": "1500.50",
        "purpose": "car",
        "credit_score": 700,
        "status": status,
        "application_date": "2024-05-01T09:30:00Z",
        "approval_score": null
    })
}

#[tokio::test]
async fn applications_drive_stats_and_rows() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loan-applications/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            application(1, "approved"),
            application(2, "pending"),
            application(3, "pending"),
        ])))
        .mount(&server)
        .await;

    let mut view = LoanView::new(client_for(&server)?);
    assert!(view.load_applications().await);

    assert_eq!(
        view.stats(),
        LoanStats {
            total: 3,
            approved: 1,
            pending: 2
        }
    );
    let rows = view.application_rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].status_label, "Approved");
    assert_eq!(rows[0].amount, "$1500.50");
    assert_eq!(rows[0].date, "May 1, 2024");
    assert_eq!(rows[0].score, "N/A");
    Ok(())
}

#[tokio::test]
async fn submit_sends_parsed_fields() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loan-applications/"))
        .and(body_json(json!({
            "loan_type": 2,
            "requested_amount": 1500.5,
            "purpose": "car",
            "credit_score": 700
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(application(9, "pending")))
        .expect(1)
        .mount(&server)
        .await;

    let view = LoanView::new(client_for(&server)?);
    let form = ApplicationForm {
        loan_type: "2".to_string(),
        requested_amount: "1500.50".to_string(),
        purpose: "car".to_string(),
        credit_score: "700".to_string(),
    };
    let outcome = view.submit_application(&form).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.value().and_then(|application| application.id), Some(9));
    Ok(())
}

#[tokio::test]
async fn unparseable_form_never_reaches_the_server() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/loan-applications/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let view = LoanView::new(client_for(&server)?);
    let form = ApplicationForm {
        loan_type: "2".to_string(),
        requested_amount: "a lot".to_string(),
        purpose: "car".to_string(),
        credit_score: "700".to_string(),
    };
    let outcome = view.submit_application(&form).await;

    assert_eq!(outcome.error(), Some("Requested amount must be a number."));
    server.verify().await;
    Ok(())
}

#[tokio::test]
async fn failed_reload_keeps_previous_state() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loan-types/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 2,
            "name": "Car Loan",
            "max_amount": "25000.00",
            "interest_rate": "7.50",
            "duration_months": 36,
            "description": "Finance a new or used car."
        }])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/loan-applications/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([application(1, "approved")])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let mut view = LoanView::new(client_for(&server)?);
    assert!(view.load_loan_types().await);
    assert!(view.load_applications().await);

    server.reset().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "down" })))
        .mount(&server)
        .await;

    assert!(!view.load_loan_types().await);
    assert!(!view.load_applications().await);

    assert_eq!(view.loan_types().len(), 1);
    assert_eq!(view.loan_type_options().len(), 2);
    assert_eq!(view.applications().len(), 1);
    assert_eq!(view.stats().approved, 1);
    Ok(())
}

#[tokio::test]
async fn dashboard_loads_customer_then_applications() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "first_name": "Amara",
            "middle_name": "N",
            "surname": "Okafor",
            "status": "approved"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/loan-applications/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([application(1, "pending")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut view = LoanView::new(client_for(&server)?);
    assert!(view.load_dashboard().await);

    assert_eq!(view.customer_name(), Some("Amara Okafor"));
    assert_eq!(view.stats().pending, 1);
    Ok(())
}

#[tokio::test]
async fn dashboard_skips_applications_when_customer_fails() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/customers/me/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Customer profile not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/loan-applications/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = LoanView::new(client_for(&server)?);
    assert!(!view.load_dashboard().await);
    assert_eq!(view.customer_name(), None);
    server.verify().await;
    Ok(())
}
