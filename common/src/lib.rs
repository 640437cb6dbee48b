//! Shared domain types for the campaign tracker frontend.
//!
//! Everything in this crate is plain Rust: wire models decoded from the REST
//! backend, request payloads, form validation, and the small state machines
//! the UI drives. Keeping them free of browser APIs lets them be tested natively.

pub mod error;
pub mod forms;
pub mod model;
pub mod requests;
pub mod search;
pub mod time;
