mod admin;
mod apply;
mod dashboard;
mod login;
mod not_found;
mod register;

pub(crate) use admin::AdminPage;
pub(crate) use apply::ApplyPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const DASHBOARD: &str = "/";
    pub const LOGIN: &str = crate::features::auth::session::LOGIN_PATH;
    pub const REGISTER: &str = "/register";
    pub const APPLY: &str = "/apply";
    pub const ADMIN: &str = "/admin";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=DashboardPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/apply") view=ApplyPage />
            <Route path=path!("/admin") view=AdminPage />
        </Routes>
    }
}
