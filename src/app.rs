use crate::{
    app_lib::{ApiClient, config::AppConfig, telemetry},
    components::{Alert, AlertKind},
    features::{auth::state::AuthProvider, loans::state::LoansProvider},
    routes::AppRoutes,
};
use leptos::prelude::*;
use leptos_router::components::Router;
use tracing::{error, info};

#[component]
pub fn App(api: ApiClient) -> impl IntoView {
    view! {
        <AuthProvider api=api.clone()>
            <LoansProvider api=api>
                <Router>
                    <AppRoutes />
                </Router>
            </LoansProvider>
        </AuthProvider>
    }
}

/// Loads configuration, installs logging and mounts the app.
pub fn start() {
    let config = AppConfig::load();
    telemetry::init(&config.log_level);

    match ApiClient::new(&config) {
        Ok(api) => {
            info!(base_url = api.base_url(), "Starting loandesk web client");
            mount_to_body(move || view! { <App api=api.clone() /> });
        }
        Err(err) => {
            error!(error = %err, "Invalid client configuration");
            let message = err.to_string();
            mount_to_body(move || {
                view! {
                    <div class="max-w-xl mx-auto mt-12">
                        <Alert kind=AlertKind::Error message=message.clone() />
                    </div>
                }
            });
        }
    }
}
