//! Marketing landing page shown to anonymous visitors.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::Header;

struct Feature {
    title: &'static str,
    blurb: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "End-to-End Encryption",
        blurb: "Your notes are encrypted before they ever leave your device.",
    },
    Feature {
        title: "Zero-Knowledge",
        blurb: "Only you can read your notes. Not even we can access them.",
    },
    Feature {
        title: "Always Available",
        blurb: "Your notes sync across devices and stay with you everywhere.",
    },
];

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();

    rsx! {
        Header {}
        div {
            class: "landing-hero",
            style: "
                max-width: 760px;
                margin: 0 auto;
                padding: 72px 24px 48px;
                text-align: center;
            ",
            h1 {
                style: "margin: 0 0 16px; font-size: 40px;",
                "Your Thoughts, Secured"
            }
            p {
                style: "margin: 0 0 32px; font-size: 17px; color: #5f6368;",
                "Capture ideas, keep them private, and reach them from anywhere."
            }
            button {
                style: "
                    padding: 12px 28px;
                    border: none;
                    border-radius: 8px;
                    background: #1976d2;
                    color: #ffffff;
                    font-size: 16px;
                    font-weight: 600;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    nav.push(Route::Register {});
                },
                "Start Writing Now"
            }
        }
        div {
            class: "landing-features",
            style: "
                display: flex;
                gap: 20px;
                max-width: 920px;
                margin: 0 auto;
                padding: 0 24px 72px;
            ",
            for feature in FEATURES {
                div {
                    key: "{feature.title}",
                    style: "
                        flex: 1;
                        padding: 24px;
                        background: #ffffff;
                        border: 1px solid #dadce0;
                        border-radius: 12px;
                    ",
                    h3 {
                        style: "margin: 0 0 8px; font-size: 16px;",
                        "{feature.title}"
                    }
                    p {
                        style: "margin: 0; font-size: 14px; color: #5f6368;",
                        "{feature.blurb}"
                    }
                }
            }
        }
    }
}
