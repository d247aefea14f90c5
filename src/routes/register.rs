//! Customer registration. Field values are sent as typed; the backend owns
//! validation and returns the message shown on failure.

use crate::{
    app_lib::ActionOutcome,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::{
        auth::state::use_auth,
        customers::types::{IdDocument, RegistrationForm},
    },
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5";

/// (field name, label, input type)
const FIELDS: [(&str, &str, &str); 15] = [
    ("first_name", "First name", "text"),
    ("middle_name", "Middle name", "text"),
    ("surname", "Surname", "text"),
    ("gender", "Gender", "text"),
    ("date_of_birth", "Date of birth", "date"),
    ("nationality", "Nationality", "text"),
    ("address", "Address", "text"),
    ("phone_number", "Phone number", "tel"),
    ("email", "Email", "email"),
    ("father_name", "Father's name", "text"),
    ("mother_name", "Mother's name", "text"),
    ("profession", "Profession", "text"),
    ("annual_income", "Annual income", "number"),
    ("password", "Password", "password"),
    ("confirm_password", "Confirm password", "password"),
];

async fn read_document(file: File) -> Option<IdDocument> {
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(err) => {
            tracing::warn!(error = ?err, "Failed to read identity document");
            return None;
        }
    };
    Some(IdDocument {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new_local(RegistrationForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |input: &RegistrationForm| {
        let input = input.clone();
        async move { auth.register(input).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = register_action.value().get() {
            match outcome {
                ActionOutcome::Success(message) => {
                    set_error.set(None);
                    set_success.set(Some(message));
                }
                ActionOutcome::Failure { error } => {
                    set_success.set(None);
                    set_error.set(Some(error));
                }
            }
        }
    });

    let on_document = move |event: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&event);
        let file = input.files().and_then(|files| files.get(0));
        spawn_local(async move {
            let document = match file {
                Some(file) => read_document(file).await,
                None => None,
            };
            form.update(|form| form.id_document = document);
        });
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_success.set(None);
        register_action.dispatch(form.get_untracked());
    };

    let inputs = FIELDS
        .into_iter()
        .map(|(name, label, input_type)| {
            view! {
                <div>
                    <label class="block mb-2 text-sm font-medium text-gray-900" for=name>
                        {label}
                    </label>
                    <input
                        id=name
                        name=name
                        type=input_type
                        class=INPUT_CLASS
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            form.update(|form| {
                                if let Some(field) = form.field_mut(name) {
                                    *field = value;
                                }
                            });
                        }
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <AppShell>
            <form id="registerForm" class="max-w-2xl mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900">"Open an account"</h1>
                <div class="grid gap-5 mb-5 md:grid-cols-2">{inputs}</div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="id_document">
                        "Identity document"
                    </label>
                    <input
                        id="id_document"
                        name="id_document"
                        type="file"
                        class=INPUT_CLASS
                        on:change=on_document
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Register"
                </Button>
                <p class="mt-4 text-sm text-gray-500">
                    "Already registered? "
                    <A href=paths::LOGIN {..} class="text-emerald-700 hover:underline">
                        "Sign in"
                    </A>
                </p>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Success message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
