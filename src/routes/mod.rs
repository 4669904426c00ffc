mod login;
mod not_found;
mod signup;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignUpPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Path the wizard submission posts to, relative to the configured API base.
pub const WIZARD_ACTION_PATH: &str = "/v1/auth/signup";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LoginPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
