//! Data models shared across the client.

mod note;
mod stats;

pub use note::{Note, NoteId};
pub use stats::{MonthlyCount, UsageStats};
