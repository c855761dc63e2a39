//! Networking modules for the remote maintenance service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes one typed async stub per contracted operation; the wire
//! schema itself lives in the `contract` crate.

pub mod api;
