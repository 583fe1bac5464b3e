//! Application services
//!
//! Desktop-specific integrations behind the core's trait seams.

mod session_store;

pub use session_store::KeyringSessionStore;
