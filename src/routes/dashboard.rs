use crate::{
    components::{AppShell, StatCard},
    features::{
        auth::{RequireAuth, state::use_auth},
        loans::state::use_loans,
    },
    routes::paths,
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700";

/// Customer overview: greeting, application counters and application history.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let loans = use_loans();
    if auth.is_authenticated.get_untracked() {
        spawn_local(async move { loans.load_dashboard().await });
    }

    let customer_name = move || {
        loans
            .view
            .with(|view| view.customer_name().map(str::to_string))
            .unwrap_or_default()
    };
    let stats = Memo::new(move |_| loans.view.with(|view| view.stats()));
    let rows = move || loans.view.with(|view| view.application_rows());

    view! {
        <AppShell>
            <RequireAuth children=move || view! {
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <h1 class="text-2xl font-semibold text-gray-900">
                            "Welcome, " <span id="customerName">{customer_name}</span>
                        </h1>
                        <A
                            href=paths::APPLY
                            {..}
                            class="text-white bg-emerald-700 hover:bg-emerald-800 font-medium rounded-lg text-sm px-5 py-2.5"
                        >
                            "Apply for a loan"
                        </A>
                    </div>
                    <div class="grid gap-4 md:grid-cols-3">
                        <StatCard
                            id="totalApplications"
                            label="Total applications"
                            value=Signal::derive(move || stats.get().total)
                        />
                        <StatCard
                            id="approvedLoans"
                            label="Approved loans"
                            value=Signal::derive(move || stats.get().approved)
                        />
                        <StatCard
                            id="pendingApplications"
                            label="Pending applications"
                            value=Signal::derive(move || stats.get().pending)
                        />
                    </div>
                    <div class="overflow-hidden bg-white shadow-sm border border-gray-200 rounded-lg">
                        <table id="applicationsTable" class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th scope="col" class=TH_CLASS>"Loan type"</th>
                                    <th scope="col" class=TH_CLASS>"Amount"</th>
                                    <th scope="col" class=TH_CLASS>"Status"</th>
                                    <th scope="col" class=TH_CLASS>"Applied"</th>
                                    <th scope="col" class=TH_CLASS>"Score"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                <For
                                    each=rows
                                    key=|row| row.key.clone()
                                    children=|row| {
                                        view! {
                                            <tr>
                                                <td class=TD_CLASS>{row.loan_type_name}</td>
                                                <td class=TD_CLASS>{row.amount}</td>
                                                <td class=TD_CLASS>
                                                    <span class={row.status_class}>{row.status_label}</span>
                                                </td>
                                                <td class=TD_CLASS>{row.date}</td>
                                                <td class=TD_CLASS>{row.score}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            } />
        </AppShell>
    }
}
