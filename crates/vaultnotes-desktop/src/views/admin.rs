//! Admin dashboard: aggregate usage stats.

use dioxus::prelude::*;

use vaultnotes_core::UsageStats;

use crate::app::Route;
use crate::components::{BarChart, Header, StatCard};
use crate::state::AppState;

/// Each figure loads independently; one failing fetch leaves the other
/// panels intact.
#[component]
pub fn Admin() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();

    use_effect(move || {
        if !state.is_authenticated() {
            nav.replace(Route::Login {});
        }
    });

    let mut stats = use_signal(UsageStats::default);
    let mut fetched = use_signal(|| false);

    use_effect(move || {
        if fetched() || !state.is_authenticated() {
            return;
        }
        let Some(api) = state.api_client() else {
            return;
        };
        let Some(access) = state.access_token() else {
            return;
        };
        fetched.set(true);

        spawn(async move {
            match api.total_notes(&access).await {
                Ok(total) => stats.write().total_notes = Some(total),
                Err(error) => tracing::warn!("Failed to fetch total notes: {error}"),
            }
            match api.total_users(&access).await {
                Ok(total) => stats.write().total_users = Some(total),
                Err(error) => tracing::warn!("Failed to fetch total users: {error}"),
            }
            match api.notes_per_month(&access).await {
                Ok(series) => stats.write().notes_per_month = series,
                Err(error) => tracing::warn!("Failed to fetch monthly notes: {error}"),
            }
            match api.users_per_month(&access).await {
                Ok(series) => stats.write().users_per_month = series,
                Err(error) => tracing::warn!("Failed to fetch monthly signups: {error}"),
            }
        });
    });

    if !state.is_authenticated() {
        return rsx! {
            Header {}
        };
    }

    let snapshot = stats();

    rsx! {
        Header {}
        div {
            class: "admin-dashboard",
            style: "max-width: 960px; margin: 0 auto; padding: 24px;",

            h1 {
                style: "margin: 0 0 24px; font-size: 24px;",
                "Dashboard"
            }

            div {
                style: "display: flex; gap: 20px; margin-bottom: 24px;",
                StatCard { title: "Total Notes", value: snapshot.total_notes }
                StatCard { title: "Total Users", value: snapshot.total_users }
            }

            div {
                style: "display: flex; gap: 20px;",
                BarChart {
                    title: "Notes per Month",
                    color: "#1a73e8",
                    data: snapshot.notes_per_month.clone(),
                }
                BarChart {
                    title: "New Users per Month",
                    color: "#34a853",
                    data: snapshot.users_per_month,
                }
            }
        }
    }
}
