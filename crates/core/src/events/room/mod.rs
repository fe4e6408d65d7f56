//! Modules for events in the `m.room` namespace.

pub mod encrypted;
pub mod encryption;
pub mod member;
