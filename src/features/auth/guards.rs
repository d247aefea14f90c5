//! Route guards. They only hide screens from the wrong visitors; the API
//! rejects unauthorized requests on its own.

use crate::{features::auth::state::use_auth, routes::paths};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Where to send a visitor who may not see a guarded page, if anywhere.
fn redirect_for(authenticated: bool, admin: bool, admin_required: bool) -> Option<&'static str> {
    if !authenticated {
        Some(paths::LOGIN)
    } else if admin_required && !admin {
        Some(paths::DASHBOARD)
    } else {
        None
    }
}

fn guard(admin_required: bool, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let allowed = move || {
        redirect_for(auth.is_authenticated.get(), auth.is_admin.get(), admin_required).is_none()
    };

    Effect::new(move |_| {
        let target = redirect_for(auth.is_authenticated.get(), auth.is_admin.get(), admin_required);
        if let Some(target) = target {
            navigate(target, Default::default());
        }
    });

    view! { <Show when=allowed>{children()}</Show> }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guard(false, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guard(true, children)
}
