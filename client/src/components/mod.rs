//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list rows, form fields, and page chrome while
//! reading shared state from Leptos context providers; pages own the
//! submit orchestration.

pub mod booking_row;
pub mod field;
pub mod nav_bar;
pub mod notice_banner;
pub mod progress_panel;
pub mod record_row;
pub mod technician_row;
