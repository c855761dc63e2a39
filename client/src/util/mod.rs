//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `form` translates raw form-field text into the contract's argument
//! types so page modules stay free of parsing detail.

pub mod form;
