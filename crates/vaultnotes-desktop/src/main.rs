//! VaultNotes Desktop Application
//!
//! A desktop client for creating, editing, and searching notes backed by an
//! authenticated remote service.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod views;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vaultnotes_core=debug".parse().unwrap())
                .add_directive("vaultnotes_desktop=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting VaultNotes...");

    dioxus::launch(app::App);
}
