//! Login/registration form.

use dioxus::prelude::*;

use vaultnotes_core::auth::{CredentialFields, Destination, SubmitMode};

use crate::app::Route;
use crate::state::AppState;

const INPUT_STYLE: &str = "
    width: 100%;
    padding: 10px 12px;
    margin-bottom: 12px;
    border: 1px solid #dadce0;
    border-radius: 6px;
    font-size: 14px;
    outline: none;
";

/// Shared form for login and registration.
///
/// Submission is busy-gated: while a request is in flight the submit button is
/// disabled and a second submit is refused by the session controller as well.
#[component]
pub fn AuthForm(mode: SubmitMode) -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let name = match mode {
        SubmitMode::Login => "Login",
        SubmitMode::Register => "Register",
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let Some(mut controller) = state.session_controller() else {
            error.set(Some("The backend endpoint is not configured.".to_string()));
            return;
        };

        busy.set(true);
        error.set(None);
        let fields = CredentialFields {
            username: username(),
            email: email(),
            password: password(),
        };

        spawn(async move {
            let result = controller.submit(mode, &fields).await;
            busy.set(false);
            match result {
                Ok(Destination::Admin) => {
                    state.session.set(controller.hydrate());
                    nav.push(Route::Admin {});
                }
                Ok(Destination::Notes) => {
                    state.session.set(controller.hydrate());
                    nav.push(Route::Home {});
                }
                Ok(Destination::Login) => {
                    nav.push(Route::Login {});
                }
                Err(failure) => {
                    error.set(Some(failure.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "form-wrapper",
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 64px 16px;
            ",

            form {
                class: "form-container",
                style: "
                    width: 100%;
                    max-width: 360px;
                    padding: 32px;
                    background: #ffffff;
                    border: 1px solid #dadce0;
                    border-radius: 12px;
                ",
                onsubmit: handle_submit,

                h1 {
                    style: "margin: 0 0 24px; font-size: 24px; text-align: center;",
                    "{name}"
                }

                input {
                    style: "{INPUT_STYLE}",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }

                if mode == SubmitMode::Register {
                    input {
                        style: "{INPUT_STYLE}",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                input {
                    style: "{INPUT_STYLE}",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }

                if let Some(message) = error() {
                    div {
                        style: "margin-bottom: 12px; color: #ea4335; font-size: 13px;",
                        "{message}"
                    }
                }

                button {
                    style: "
                        width: 100%;
                        padding: 10px;
                        border: none;
                        border-radius: 6px;
                        background: #1976d2;
                        color: #ffffff;
                        font-weight: 600;
                        cursor: pointer;
                    ",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Loading..." } else { "{name}" }
                }

                if mode == SubmitMode::Login {
                    div {
                        style: "margin-top: 16px; text-align: center; font-size: 13px;",
                        span { "Don't have an account? " }
                        button {
                            style: "
                                border: none;
                                background: none;
                                color: #1976d2;
                                font-weight: 600;
                                cursor: pointer;
                            ",
                            r#type: "button",
                            onclick: move |_| {
                                nav.push(Route::Register {});
                            },
                            "Register"
                        }
                    }
                }
            }
        }
    }
}
