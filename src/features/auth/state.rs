//! Auth session context for the view layer. The provider owns the session
//! store (restored from `localStorage` on construction) and exposes derived
//! signals for guards and routes. Each operation awaits the request first and
//! then applies the response to the store, so no borrow spans a suspension.

use crate::{
    app_lib::{
        ActionOutcome, ApiClient, navigation::BrowserNavigator, storage::BrowserStorage,
    },
    features::{
        auth::{
            session::{SessionStore, register_customer},
            types::User,
        },
        customers::types::RegistrationForm,
    },
};
use leptos::prelude::*;

type BrowserSession = SessionStore<BrowserStorage, BrowserNavigator>;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    store: StoredValue<BrowserSession, LocalStorage>,
    pub user: RwSignal<Option<User>>,
    pub is_authenticated: Signal<bool>,
    pub is_admin: Signal<bool>,
}

impl AuthContext {
    fn new(store: BrowserSession) -> Self {
        let user = RwSignal::new(store.current_user().cloned());
        let is_authenticated = Signal::derive(move || user.with(Option::is_some));
        let is_admin =
            Signal::derive(move || user.with(|user| user.as_ref().is_some_and(|u| u.is_admin)));
        Self {
            store: StoredValue::new_local(store),
            user,
            is_authenticated,
            is_admin,
        }
    }

    pub fn api(&self) -> ApiClient {
        self.store.with_value(|store| store.api().clone())
    }

    /// Logs in and publishes the cached user.
    pub async fn login(&self, username: String, password: String) -> ActionOutcome<User> {
        let result = self.api().login(&username, &password).await;
        let mut outcome = ActionOutcome::failure("Session is no longer available.");
        self.store
            .update_value(|store| outcome = store.apply_login(result));
        self.sync();
        outcome
    }

    /// Logs out; on success the store navigates away from the app.
    pub async fn logout(&self) {
        let result = self.api().logout().await;
        self.store.update_value(|store| {
            store.apply_logout(result);
        });
        self.sync();
    }

    pub async fn register(&self, form: RegistrationForm) -> ActionOutcome<String> {
        register_customer(&self.api(), &form).await
    }

    fn sync(&self) {
        let current = self.store.with_value(|store| store.current_user().cloned());
        self.user.set(current);
    }
}

/// Provides auth context, restoring the cached session without a request.
#[component]
pub fn AuthProvider(api: ApiClient, children: Children) -> impl IntoView {
    let store = SessionStore::new(api, BrowserStorage, BrowserNavigator);
    provide_context(AuthContext::new(store));

    view! { {children()} }
}

/// Returns the current auth context.
///
/// # Panics
/// Panics when called outside `AuthProvider`; every route is mounted inside it.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
