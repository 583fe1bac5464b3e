//! Top navigation chrome.
//!
//! Switches between anonymous and authenticated chrome purely from credential
//! presence; role never matters here, only at login-time routing.

use dioxus::prelude::*;

use crate::app::Route;
use crate::state::AppState;

const BUTTON_STYLE: &str = "
    padding: 6px 16px;
    border-radius: 6px;
    font-weight: 600;
    font-size: 14px;
    cursor: pointer;
";

/// Application bar with navigation and session controls.
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let authenticated = state.is_authenticated();

    rsx! {
        header {
            class: "app-header",
            style: "
                display: flex;
                align-items: center;
                padding: 12px 24px;
                background: radial-gradient(circle, #0b192f, #172a45);
                border-bottom: 2px solid #1976d2;
            ",

            div {
                style: "flex: 1; cursor: pointer;",
                onclick: move |_| {
                    nav.push(Route::Landing {});
                },
                span {
                    style: "
                        font-size: 22px;
                        font-weight: 700;
                        color: #42a5f5;
                    ",
                    "VaultNotes"
                }
            }

            if authenticated {
                button {
                    style: "{BUTTON_STYLE} border: 1px solid #1976d2; background: transparent; color: #e3f2fd;",
                    onclick: move |_| {
                        state.logout();
                        nav.push(Route::Login {});
                    },
                    "Logout"
                }
            } else {
                div {
                    style: "display: flex; gap: 12px;",
                    button {
                        style: "{BUTTON_STYLE} border: 1px solid #1976d2; background: transparent; color: #42a5f5;",
                        onclick: move |_| {
                            nav.push(Route::Login {});
                        },
                        "Login"
                    }
                    button {
                        style: "{BUTTON_STYLE} border: none; background: #1976d2; color: #ffffff;",
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
