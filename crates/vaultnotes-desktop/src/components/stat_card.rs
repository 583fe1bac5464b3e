//! Aggregate stat card for the admin dashboard.

use dioxus::prelude::*;

/// Single headline figure; shows a loading placeholder until the value lands.
#[component]
pub fn StatCard(title: String, value: Option<u64>) -> Element {
    let rendered = value.map_or_else(|| "Loading...".to_string(), |count| count.to_string());

    rsx! {
        div {
            class: "stat-card",
            style: "
                flex: 1;
                padding: 20px 24px;
                background: #ffffff;
                border: 1px solid #dadce0;
                border-radius: 12px;
            ",
            div {
                class: "stat-title",
                style: "font-size: 13px; color: #5f6368; margin-bottom: 8px;",
                "{title}"
            }
            div {
                class: "stat-value",
                style: "font-size: 28px; font-weight: 700;",
                "{rendered}"
            }
        }
    }
}
