//! vaultnotes-core - Core library for VaultNotes
//!
//! This crate contains the shared models, typed API client, session
//! lifecycle, and notes synchronization logic used by the VaultNotes
//! client applications.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod notes;
pub mod util;

pub use api::{ApiClient, ApiError, ApiResult};
pub use models::{MonthlyCount, Note, NoteId, UsageStats};
