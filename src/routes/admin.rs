//! Operator review screens. Lists refetch after every successful action so the
//! tables reflect the server's view of each record.

use crate::{
    app_lib::ActionOutcome,
    components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner},
    features::{
        admin::review,
        auth::{RequireAdmin, state::use_auth},
        loans::view::{format_amount, format_date, format_score},
    },
};
use leptos::prelude::*;

const TH_CLASS: &str =
    "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700";

#[derive(Clone, Copy)]
enum ReviewAction {
    ApproveCustomer(i64),
    ApproveApplication(i64),
    RejectApplication(i64),
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = use_auth();
    let customers = LocalResource::new(move || async move { auth.api().list_customers().await });
    let applications =
        LocalResource::new(move || async move { auth.api().get_loan_applications().await });
    let (notice, set_notice) = signal::<Option<(AlertKind, String)>>(None);

    let review_action = Action::new_local(move |action: &ReviewAction| {
        let action = *action;
        async move {
            let api = auth.api();
            let outcome = match action {
                ReviewAction::ApproveCustomer(id) => review::approve_customer(&api, id).await,
                ReviewAction::ApproveApplication(id) => {
                    review::approve_application(&api, id).await
                }
                ReviewAction::RejectApplication(id) => review::reject_application(&api, id).await,
            };
            (action, outcome)
        }
    });

    Effect::new(move |_| {
        if let Some((action, outcome)) = review_action.value().get() {
            match outcome {
                ActionOutcome::Success(message) => {
                    set_notice.set(Some((AlertKind::Success, message)));
                    match action {
                        ReviewAction::ApproveCustomer(_) => customers.refetch(),
                        _ => applications.refetch(),
                    }
                }
                ActionOutcome::Failure { error } => {
                    set_notice.set(Some((AlertKind::Error, error)));
                }
            }
        }
    });

    view! {
        <AppShell>
            <RequireAdmin children=move || view! {
                <div class="space-y-8">
                    <h1 class="text-2xl font-semibold text-gray-900">"Review"</h1>
                    {move || {
                        notice
                            .get()
                            .map(|(kind, message)| {
                                view! {
                                    <Alert
                                        kind=kind
                                        message=message
                                        on_dismiss=Callback::new(move |()| set_notice.set(None))
                                    />
                                }
                            })
                    }}

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"Pending customers"</h2>
                        {move || match customers.get() {
                            None => view! { <Spinner label="Loading customers" /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            Some(Ok(list)) => {
                                let pending = review::pending_customers(&list);
                                if pending.is_empty() {
                                    return view! {
                                        <p class="text-sm text-gray-500">"No customers awaiting approval."</p>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <table class="min-w-full divide-y divide-gray-200 bg-white border border-gray-200 rounded-lg">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th scope="col" class=TH_CLASS>"Name"</th>
                                                <th scope="col" class=TH_CLASS>"Email"</th>
                                                <th scope="col" class=TH_CLASS>"Status"</th>
                                                <th scope="col" class=TH_CLASS>"Registered"</th>
                                                <th scope="col" class=TH_CLASS></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200">
                                            {pending
                                                .into_iter()
                                                .map(|customer| {
                                                    let id = customer.id;
                                                    view! {
                                                        <tr>
                                                            <td class=TD_CLASS>{customer.display_name()}</td>
                                                            <td class=TD_CLASS>{customer.email.clone()}</td>
                                                            <td class=TD_CLASS>{customer.status.label()}</td>
                                                            <td class=TD_CLASS>
                                                                {format_date(customer.created_at.as_deref())}
                                                            </td>
                                                            <td class=TD_CLASS>
                                                                <Button
                                                                    variant=ButtonVariant::Approve
                                                                    disabled=review_action.pending()
                                                                    on_click=Callback::new(move |()| {
                                                                        review_action.dispatch(ReviewAction::ApproveCustomer(id));
                                                                    })
                                                                >
                                                                    "Approve"
                                                                </Button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        }}
                    </section>

                    <section class="space-y-3">
                        <h2 class="text-lg font-semibold text-gray-900">"Pending applications"</h2>
                        {move || match applications.get() {
                            None => view! { <Spinner label="Loading applications" /> }.into_any(),
                            Some(Err(err)) => {
                                view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                    .into_any()
                            }
                            Some(Ok(list)) => {
                                let pending = review::pending_applications(&list);
                                if pending.is_empty() {
                                    return view! {
                                        <p class="text-sm text-gray-500">"No applications awaiting review."</p>
                                    }
                                    .into_any();
                                }
                                view! {
                                    <table class="min-w-full divide-y divide-gray-200 bg-white border border-gray-200 rounded-lg">
                                        <thead class="bg-gray-50">
                                            <tr>
                                                <th scope="col" class=TH_CLASS>"Loan type"</th>
                                                <th scope="col" class=TH_CLASS>"Amount"</th>
                                                <th scope="col" class=TH_CLASS>"Credit score"</th>
                                                <th scope="col" class=TH_CLASS>"Applied"</th>
                                                <th scope="col" class=TH_CLASS>"Score"</th>
                                                <th scope="col" class=TH_CLASS></th>
                                            </tr>
                                        </thead>
                                        <tbody class="divide-y divide-gray-200">
                                            {pending
                                                .into_iter()
                                                .filter_map(|application| {
                                                    let id = application.id?;
                                                    Some(view! {
                                                        <tr>
                                                            <td class=TD_CLASS>{application.loan_type_name.clone()}</td>
                                                            <td class=TD_CLASS>
                                                                {format_amount(application.requested_amount)}
                                                            </td>
                                                            <td class=TD_CLASS>{application.credit_score}</td>
                                                            <td class=TD_CLASS>
                                                                {format_date(application.application_date.as_deref())}
                                                            </td>
                                                            <td class=TD_CLASS>
                                                                {format_score(application.approval_score)}
                                                            </td>
                                                            <td class=TD_CLASS>
                                                                <Button
                                                                    variant=ButtonVariant::Approve
                                                                    disabled=review_action.pending()
                                                                    on_click=Callback::new(move |()| {
                                                                        review_action.dispatch(ReviewAction::ApproveApplication(id));
                                                                    })
                                                                >
                                                                    "Approve"
                                                                </Button>
                                                                <Button
                                                                    variant=ButtonVariant::Reject
                                                                    disabled=review_action.pending()
                                                                    on_click=Callback::new(move |()| {
                                                                        review_action.dispatch(ReviewAction::RejectApplication(id));
                                                                    })
                                                                >
                                                                    "Reject"
                                                                </Button>
                                                            </td>
                                                        </tr>
                                                    })
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                .into_any()
                            }
                        }}
                    </section>
                </div>
            } />
        </AppShell>
    }
}
