//! # client
//!
//! Leptos + WASM browser client for the car-maintenance booking service.
//! Renders one form-and-list view per workflow and wires each submission
//! to exactly one remote operation from the `contract` crate; all booking,
//! progress, and payment logic lives behind that contract in the remote
//! service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
