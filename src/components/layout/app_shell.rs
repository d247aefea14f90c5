//! Shared layout wrapper with navigation and content container. Links shown
//! depend on the cached session; the backend still enforces access control.

use crate::{features::auth::state::use_auth, routes::paths};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-emerald-700 md:p-0";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let is_admin = auth.is_admin;
    let username = move || {
        auth.user
            .with(|user| user.as_ref().map(|user| user.username.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href=paths::DASHBOARD {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap text-emerald-800">
                            "Loandesk"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row items-center space-x-8">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <li>
                                        <A href=paths::LOGIN {..} class=NAV_LINK>
                                            "Sign In"
                                        </A>
                                    </li>
                                    <li>
                                        <A href=paths::REGISTER {..} class=NAV_LINK>
                                            "Register"
                                        </A>
                                    </li>
                                }
                            }
                        >
                            <li>
                                <A href=paths::DASHBOARD {..} class=NAV_LINK>
                                    "Dashboard"
                                </A>
                            </li>
                            <li>
                                <A href=paths::APPLY {..} class=NAV_LINK>
                                    "Apply"
                                </A>
                            </li>
                            <Show when=move || is_admin.get()>
                                <li>
                                    <A href=paths::ADMIN {..} class=NAV_LINK>
                                        "Review"
                                    </A>
                                </li>
                            </Show>
                            <li class="text-sm text-gray-500">{username}</li>
                            <li>
                                <button
                                    type="button"
                                    class=NAV_LINK
                                    on:click=move |_| {
                                        spawn_local(async move {
                                            auth.logout().await;
                                        });
                                    }
                                >
                                    "Sign Out"
                                </button>
                            </li>
                        </Show>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
