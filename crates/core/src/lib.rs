//! recurra_core - functional core for recurring calendar events.
//!
//! Everything in this crate is pure: no I/O, no clock, no shared state.
//! [`recurrence`] expands a rule into concrete occurrence dates and
//! [`validation`] gates rules before they are expanded.

pub mod recurrence;
pub mod serde;
pub mod validation;
