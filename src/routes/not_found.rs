use crate::{components::AppShell, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
                <h1 class="text-4xl font-bold text-gray-900">"404"</h1>
                <p class="mt-2 text-gray-500">"This page does not exist."</p>
                <A
                    href=paths::DASHBOARD
                    {..}
                    class="mt-6 text-emerald-700 hover:text-emerald-900 font-medium"
                >
                    "Back to dashboard"
                </A>
            </div>
        </AppShell>
    }
}
