//! Signup route hosting the wizard render shape: one field per step, with
//! the accumulated values submitted as JSON at the end.

use crate::app_lib::api;
use crate::components::AppShell;
use crate::features::login::LoginForm;
use leptos::prelude::*;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let action = api::api_url(super::WIZARD_ACTION_PATH);

    view! {
        <AppShell>
            <div class="min-h-[70vh] flex items-center justify-center px-6 py-10">
                <div class="w-full max-w-md rounded-2xl border border-slate-200 bg-white p-6 shadow-sm sm:p-8">
                    <div class="mb-6 space-y-2">
                        <p class="text-[11px] font-semibold uppercase tracking-[0.2em] text-slate-400">
                            "Create account"
                        </p>
                        <h1 class="text-2xl font-semibold text-slate-900">"Create account"</h1>
                        <p class="text-sm text-slate-500">
                            "Three quick steps: username, email, password."
                        </p>
                    </div>
                    <LoginForm action=action is_multi_step=true />
                </div>
            </div>
        </AppShell>
    }
}
