use leptos::prelude::*;

/// Busy indicator. The label is shown next to the wheel when given.
#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-gray-500" role="status" aria-live="polite">
            <span class="inline-block h-6 w-6 animate-spin rounded-full border-4 border-emerald-200 border-t-emerald-600"></span>
            <span class:sr-only=label.is_none()>{label.unwrap_or("Loading")}</span>
        </div>
    }
}
