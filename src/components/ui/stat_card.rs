use leptos::prelude::*;

/// One dashboard counter.
#[component]
pub fn StatCard(
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm">
            <p class="text-sm text-gray-500">{label}</p>
            <p id=id class="mt-1 text-3xl font-semibold text-gray-900">
                {move || value.get()}
            </p>
        </div>
    }
}
