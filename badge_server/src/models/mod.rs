//! Domain types for badge resolution.

pub mod status;
