//! Cross-crate integration and property tests for NightSwitch
//!
//! The tests live in `tests/`; this crate exists to anchor them to the
//! workspace.
