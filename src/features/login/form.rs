//! The login/registration form component in its two render shapes. The flat
//! shape is a plain browser form post and never touches the step sequencer or
//! the submission client; the wizard shape collects one field per step and
//! submits the accumulated values as JSON at the end.

use crate::app_lib::{AppError, config::AppConfig};
use crate::components::{Alert, AlertKind, Button, Spinner};
use crate::features::login::{
    client,
    fields::{FieldEntry, FieldName, FieldValues},
    step::{FormStep, StepAdvance},
};
use leptos::{ev::SubmitEvent, prelude::*};

/// Fixed destination of the browser-native flat form post.
pub const FLAT_LOGIN_ROUTE: &str = "/login";
/// Hidden field carrying the host-supplied anti-forgery token in flat mode.
pub const CSRF_FIELD_NAME: &str = "_token";

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-slate-700";
const INPUT_CLASS: &str = "w-full rounded-xl border border-slate-200 bg-slate-50 px-3 py-2.5 text-sm text-slate-900 focus:border-slate-400 focus:ring-2 focus:ring-slate-200";

#[derive(Clone)]
/// Captures the wizard submission for the async action without borrowing
/// signals.
struct SubmitInput {
    action: String,
    values: FieldValues,
}

/// Renders the form in the shape selected by `is_multi_step`. Consumers rely
/// only on the semantic field names (`username`, `email`, `password`) and the
/// submit control; `action` is the wizard submission address and is unused by
/// the flat shape.
#[component]
pub fn LoginForm(action: String, #[prop(optional)] is_multi_step: bool) -> impl IntoView {
    if is_multi_step {
        view! { <WizardForm action=action /> }.into_any()
    } else {
        view! { <FlatForm /> }.into_any()
    }
}

/// Flat shape: all fields at once, standard browser form submission to the
/// fixed login route. The anti-forgery token is whatever per-session value
/// the hosting page injected through the runtime config; it renders empty
/// when the host supplied none.
#[component]
fn FlatForm() -> impl IntoView {
    let config = AppConfig::load();

    view! {
        <form class="space-y-4" method="POST" action=FLAT_LOGIN_ROUTE>
            <input type="hidden" name=CSRF_FIELD_NAME value=config.csrf_token />
            <div>
                <label class=LABEL_CLASS for=FieldName::Username.as_str()>
                    "Username"
                </label>
                <input
                    id=FieldName::Username.as_str()
                    name=FieldName::Username.as_str()
                    type="text"
                    class=INPUT_CLASS
                    autocomplete="username"
                    placeholder="e.g. jsmith"
                    required
                />
            </div>
            <div>
                <label class=LABEL_CLASS for=FieldName::Email.as_str()>
                    "Email"
                </label>
                <input
                    id=FieldName::Email.as_str()
                    name=FieldName::Email.as_str()
                    type="email"
                    class=INPUT_CLASS
                    autocomplete="email"
                    inputmode="email"
                    placeholder="e.g. jsmith@example.com"
                    required
                />
            </div>
            <div>
                <label class=LABEL_CLASS for=FieldName::Password.as_str()>
                    "Password"
                </label>
                <input
                    id=FieldName::Password.as_str()
                    name=FieldName::Password.as_str()
                    type="password"
                    class=INPUT_CLASS
                    autocomplete="current-password"
                    required
                />
            </div>
            <Button button_type="submit">"Login"</Button>
        </form>
    }
}

/// Wizard shape: one field per step. Each accepted submission merges the
/// active field into the accumulated values and advances the sequencer
/// explicitly; the terminal step dispatches the submission client instead.
#[component]
fn WizardForm(action: String) -> impl IntoView {
    let (current_step, set_current_step) = signal(FormStep::initial());
    let (form_values, set_form_values) = signal(FieldValues::new());
    let (input_value, set_input_value) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let submit_action = Action::new_local(move |input: &SubmitInput| {
        let input = input.clone();
        async move { client::submit_login(&input.action, &input.values).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(outcome) => match outcome.redirect {
                    Some(url) => {
                        log::info!("Submission accepted, redirecting to {url}");
                        if let Err(err) = follow_redirect(&url) {
                            log::error!("{err}");
                            set_error.set(Some(err));
                        }
                    }
                    None => log::info!("Submission accepted without a redirect"),
                },
                Err(err) => {
                    log::error!("Submission failed: {err}");
                    set_error.set(Some(err));
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let step = current_step.get_untracked();
        let mut values = form_values.get_untracked();

        if let Some(name) = step.field() {
            let value = input_value.get_untracked();
            if value.is_empty() {
                // The `required` attribute keeps this path unreachable in a
                // browser; the guard only makes the handler total.
                return;
            }
            values.merge(FieldEntry { name, value });
            set_form_values.set(values.clone());
            set_input_value.set(String::new());
        }

        match step.advance() {
            StepAdvance::Next(next) => set_current_step.set(next),
            StepAdvance::Submit => {
                submit_action.dispatch(SubmitInput {
                    action: action.clone(),
                    values,
                });
            }
        }
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            {move || {
                let step = current_step.get();
                match step.field() {
                    Some(name) => {
                        let (input_type, placeholder, autocomplete, label) = match name {
                            FieldName::Username => {
                                ("text", Some("e.g. jsmith"), "username", "Username")
                            }
                            FieldName::Email => {
                                ("email", Some("e.g. jsmith@example.com"), "email", "Email")
                            }
                            FieldName::Password => ("password", None, "new-password", "Password"),
                        };

                        view! {
                            <div>
                                <label class=LABEL_CLASS for=name.as_str()>{label}</label>
                                <input
                                    id=name.as_str()
                                    name=name.as_str()
                                    type=input_type
                                    class=INPUT_CLASS
                                    autocomplete=autocomplete
                                    placeholder=placeholder
                                    autofocus
                                    required
                                    prop:value=input_value
                                    on:input=move |event| set_input_value.set(event_target_value(&event))
                                />
                            </div>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <Alert
                                kind=AlertKind::Info
                                message="Welcome! Please click the \"next\" button to proceed."
                                    .to_string()
                            />
                        }
                            .into_any()
                    }
                }
            }}
            <Button button_type="submit" disabled=submit_action.pending()>
                {move || current_step.get().submit_label()}
            </Button>
            {move || {
                submit_action
                    .pending()
                    .get()
                    .then_some(view! { <div class="mt-4"><Spinner /></div> })
            }}
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="mt-4">
                                <Alert kind=AlertKind::Error message=err.to_string() />
                            </div>
                        }
                    })
            }}
        </form>
    }
}

/// Performs the full browser navigation for a redirect outcome. The target
/// may be outside this application, so it does not go through the
/// client-side router.
fn follow_redirect(url: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Navigation("No browsing context available.".to_string()))?;
    window
        .location()
        .set_href(url)
        .map_err(|_| AppError::Navigation(format!("Failed to navigate to {url}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_mode_posts_to_the_fixed_login_route() {
        assert_eq!(FLAT_LOGIN_ROUTE, "/login");
    }

    #[test]
    fn the_token_field_keeps_its_wire_name() {
        assert_eq!(CSRF_FIELD_NAME, "_token");
        // The token field is intentionally outside the collected field set.
        assert!(CSRF_FIELD_NAME.parse::<FieldName>().is_err());
    }
}
