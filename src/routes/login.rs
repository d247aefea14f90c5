use crate::{
    app_lib::ActionOutcome,
    components::{Alert, AlertKind, AppShell, Button, Spinner},
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::{components::A, hooks::use_navigate};

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-emerald-500 focus:border-emerald-500 block w-full p-2.5";

#[derive(Clone)]
struct LoginInput {
    username: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move { auth.login(input.username, input.password).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = login_action.value().get() {
            match outcome {
                ActionOutcome::Success(_) => {
                    navigate(paths::DASHBOARD, Default::default());
                }
                ActionOutcome::Failure { error } => set_error.set(Some(error)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let username_value = username.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if username_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Username and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            username: username_value,
            password: password_value,
        });
    };

    view! {
        <AppShell>
            <form id="loginForm" class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900">"Sign in"</h1>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="username">
                        "Username"
                    </label>
                    <input
                        id="username"
                        type="text"
                        class=INPUT_CLASS
                        autocomplete="username"
                        required
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        autocomplete="current-password"
                        required
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                <p class="mt-4 text-sm text-gray-500">
                    "No account yet? "
                    <A href=paths::REGISTER {..} class="text-emerald-700 hover:underline">
                        "Register"
                    </A>
                </p>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
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
