//! NightSwitch Storage Module
//!
//! This crate provides persistent preference storage for NightSwitch. A
//! preference is a single named key in an origin-scoped key/value store:
//! present with a marker value, or absent. The [`store::PreferenceStore`]
//! trait abstracts the backing so the theme controller can be driven
//! against a real filesystem store or an in-memory fake.

pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::{FileStore, MemoryStore, PreferenceStore};
