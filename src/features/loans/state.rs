//! Loan view context. One `LoanView` per app instance, held in a local signal.
//! Loads await the request outside the signal and then apply the result
//! field by field, so a loan type load and an applications load running
//! together never overwrite each other.

use crate::{
    app_lib::{ActionOutcome, ApiClient},
    features::loans::{
        types::{ApplicationForm, LoanApplication},
        view::{self, LoanView},
    },
};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct LoansContext {
    pub view: RwSignal<LoanView, LocalStorage>,
}

impl LoansContext {
    fn api(&self) -> ApiClient {
        self.view.with_untracked(|view| view.api().clone())
    }

    pub async fn load_loan_types(&self) {
        if let Some(loan_types) = view::fetch_loan_types(&self.api()).await {
            self.view.update(|view| view.set_loan_types(loan_types));
        }
    }

    pub async fn load_applications(&self) {
        if let Some(applications) = view::fetch_applications(&self.api()).await {
            self.view.update(|view| view.set_applications(applications));
        }
    }

    pub async fn load_dashboard(&self) {
        let Some(customer) = view::fetch_customer(&self.api()).await else {
            return;
        };
        self.view.update(|view| view.set_customer(&customer));
        self.load_applications().await;
    }

    pub async fn submit_application(
        &self,
        form: ApplicationForm,
    ) -> ActionOutcome<LoanApplication> {
        view::submit_application(&self.api(), &form).await
    }
}

#[component]
pub fn LoansProvider(api: ApiClient, children: Children) -> impl IntoView {
    provide_context(LoansContext {
        view: RwSignal::new_local(LoanView::new(api)),
    });

    view! { {children()} }
}

/// # Panics
/// Panics when called outside `LoansProvider`.
pub fn use_loans() -> LoansContext {
    expect_context::<LoansContext>()
}
