use dioxus::prelude::*;

use vaultnotes_core::auth::SubmitMode;

use crate::components::{AuthForm, Header};

#[component]
pub fn Register() -> Element {
    rsx! {
        Header {}
        AuthForm { mode: SubmitMode::Register }
    }
}
