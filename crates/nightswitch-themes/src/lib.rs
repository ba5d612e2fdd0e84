//! NightSwitch Theme Toggle
//!
//! This crate provides the light/dark theme toggle behavior for
//! NightSwitch: reading the persisted preference at startup, keeping the
//! toggle switch and the active stylesheet in sync, and notifying
//! listeners of every change.

pub mod config;
pub mod controller;
pub mod error;
pub mod surface;
pub mod types;

pub use config::ToggleConfig;
pub use controller::{ThemeChanged, ThemeToggleController};
pub use error::{Result, ThemeError};
pub use surface::{LinkHandle, StylesheetLink, SwitchHandle, ToggleSwitch};
pub use types::Theme;
