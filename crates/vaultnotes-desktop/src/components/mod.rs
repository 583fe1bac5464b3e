//! UI Components
//!
//! Reusable UI components for the desktop application.

mod auth_form;
mod bar_chart;
mod header;
mod note_card;
mod note_editor;
mod note_list;
mod search_bar;
mod stat_card;

pub use auth_form::AuthForm;
pub use bar_chart::BarChart;
pub use header::Header;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_bar::SearchBar;
pub use stat_card::StatCard;
