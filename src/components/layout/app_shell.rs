//! Shared layout wrapper with a header and content container so routes can
//! focus on form content. The footer carries the build commit for quick
//! deployment checks.

use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header, a main content container, and a build footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <div class="min-h-screen flex flex-col bg-slate-50">
            <header class="border-b border-slate-200 bg-white">
                <div class="max-w-screen-md flex items-center justify-between mx-auto p-4">
                    <A
                        href="/"
                        {..}
                        class="font-semibold text-slate-900 whitespace-nowrap"
                    >
                        "Login Wizard"
                    </A>
                    <A
                        href="/signup"
                        {..}
                        class="text-sm text-slate-500 hover:text-slate-900"
                    >
                        "Create account"
                    </A>
                </div>
            </header>
            <main class="flex-1">{children()}</main>
            <footer class="p-4 text-center text-xs text-slate-400">
                <span>"build "</span>
                <span class="font-mono">{commit}</span>
            </footer>
        </div>
    }
}
