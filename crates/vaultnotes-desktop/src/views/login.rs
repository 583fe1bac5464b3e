use dioxus::prelude::*;

use vaultnotes_core::auth::SubmitMode;

use crate::components::{AuthForm, Header};

#[component]
pub fn Login() -> Element {
    rsx! {
        Header {}
        AuthForm { mode: SubmitMode::Login }
    }
}
