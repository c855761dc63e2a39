//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`notice`, `booking`, `progress`, ...) so each
//! page depends on a small focused model. Every struct is provided as an
//! `RwSignal` context by the root component.

pub mod booking;
pub mod handoff;
pub mod notice;
pub mod payment;
pub mod progress;
