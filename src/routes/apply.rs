use crate::{
    app_lib::ActionOutcome,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::{
        auth::{RequireAuth, state::use_auth},
        loans::{state::use_loans, types::ApplicationForm},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5";
const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900";

/// Loan products and the application form.
#[component]
pub fn ApplyPage() -> impl IntoView {
    let auth = use_auth();
    let loans = use_loans();
    if auth.is_authenticated.get_untracked() {
        spawn_local(async move { loans.load_loan_types().await });
    }

    let form = RwSignal::new(ApplicationForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let submit_action = Action::new_local(move |input: &ApplicationForm| {
        let input = input.clone();
        async move { loans.submit_application(input).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = submit_action.value().get() {
            match outcome {
                ActionOutcome::Success(_) => {
                    set_error.set(None);
                    set_success.set(Some("Loan application submitted.".to_string()));
                    form.set(ApplicationForm::default());
                    spawn_local(async move { loans.load_applications().await });
                }
                ActionOutcome::Failure { error } => {
                    set_success.set(None);
                    set_error.set(Some(error));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(None);
        submit_action.dispatch(form.get_untracked());
    };

    let cards = move || loans.view.with(|view| view.loan_type_cards());
    let options = move || loans.view.with(|view| view.loan_type_options());

    view! {
        <AppShell>
            <RequireAuth children=move || view! {
                <div class="space-y-8">
                    <div id="loanTypes" class="grid gap-4 md:grid-cols-3">
                        <For
                            each=cards
                            key=|card| card.id
                            children=|card| {
                                view! {
                                    <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm">
                                        <h3 class="text-lg font-semibold text-gray-900">{card.name}</h3>
                                        <p class="text-sm text-gray-600">"Max amount: " {card.max_amount}</p>
                                        <p class="text-sm text-gray-600">"Interest rate: " {card.interest_rate}</p>
                                        <p class="text-sm text-gray-600">"Duration: " {card.duration}</p>
                                        <p class="mt-2 text-sm text-gray-500">{card.description}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                    <form id="loanApplicationForm" class="max-w-xl space-y-5" on:submit=on_submit>
                        <div>
                            <label class=LABEL_CLASS for="loan_type">"Loan type"</label>
                            <select
                                id="loan_type"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|form| form.loan_type.clone())
                                on:change=move |event| {
                                    let value = event_target_value(&event);
                                    form.update(|form| form.loan_type = value);
                                }
                            >
                                <For
                                    each=options
                                    key=|option| option.value.clone()
                                    children=|option| {
                                        view! { <option value={option.value}>{option.label}</option> }
                                    }
                                />
                            </select>
                        </div>
                        <div>
                            <label class=LABEL_CLASS for="requested_amount">"Requested amount"</label>
                            <input
                                id="requested_amount"
                                type="number"
                                step="0.01"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|form| form.requested_amount.clone())
                                on:input=move |event| {
                                    let value = event_target_value(&event);
                                    form.update(|form| form.requested_amount = value);
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS for="purpose">"Purpose"</label>
                            <textarea
                                id="purpose"
                                rows="3"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|form| form.purpose.clone())
                                on:input=move |event| {
                                    let value = event_target_value(&event);
                                    form.update(|form| form.purpose = value);
                                }
                            />
                        </div>
                        <div>
                            <label class=LABEL_CLASS for="credit_score">"Credit score"</label>
                            <input
                                id="credit_score"
                                type="number"
                                class=INPUT_CLASS
                                prop:value=move || form.with(|form| form.credit_score.clone())
                                on:input=move |event| {
                                    let value = event_target_value(&event);
                                    form.update(|form| form.credit_score = value);
                                }
                            />
                        </div>
                        <Button button_type="submit" disabled=submit_action.pending()>
                            "Submit application"
                        </Button>
                        {move || {
                            submit_action
                                .pending()
                                .get()
                                .then_some(view! { <div><Spinner /></div> })
                        }}
                        {move || {
                            success
                                .get()
                                .map(|message| view! { <Alert kind=AlertKind::Success message=message /> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
                        }}
                    </form>
                </div>
            } />
        </AppShell>
    }
}
