//! Alert banners for success and error messages. Messages come from the API
//! or local validation and must never include passwords.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "border-red-200 bg-red-50 text-red-700",
            AlertKind::Success => "border-emerald-200 bg-emerald-50 text-emerald-800",
        }
    }
}

/// Renders a banner; a close button appears when `on_dismiss` is set.
#[component]
pub fn Alert(
    kind: AlertKind,
    message: String,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let role = match kind {
        AlertKind::Error => "alert",
        AlertKind::Success => "status",
    };

    view! {
        <div
            class=format!(
                "flex items-start justify-between gap-4 rounded-lg border px-4 py-3 text-sm {}",
                kind.class(),
            )
            role=role
        >
            <span>{message}</span>
            {on_dismiss
                .map(|on_dismiss| {
                    view! {
                        <button
                            type="button"
                            class="font-semibold opacity-60 hover:opacity-100"
                            aria-label="Dismiss"
                            on:click=move |_| on_dismiss.run(())
                        >
                            "×"
                        </button>
                    }
                })}
        </div>
    }
}
