//! album-keys - typeable keyboard shortcuts for photo albums
//!
//! The `acekey` module assigns every album a short unique keybinding and
//! matches typed characters against the result. The remaining modules are
//! the host around it: album loading, configuration and the picker UI.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod acekey;
pub mod albums;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub mod ui;
