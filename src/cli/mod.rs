//! Workflow orchestration shared by the binary and library callers

pub mod orchestration;

pub use orchestration::{resolve_next_version, Resolution};
