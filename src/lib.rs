//! Floating-toolbar screen annotation overlay.
//!
//! The crate is split into a platform-free core and a thin host boundary:
//! - [`draw`]: shapes, stroke styling and the pointer-driven drawing surface
//! - [`toolbar`]: tool selection, hide/restore and window dragging
//! - [`overlay`]: session lifecycle against [`overlay::WindowHost`] implementations
//! - [`config`]: user settings loaded from `~/.config/overmark/config.toml`
//! - [`script`]: replaying recorded input against a headless session

pub mod config;
pub mod draw;
pub mod input;
pub mod notification;
pub mod overlay;
pub mod script;
pub mod toolbar;
pub mod util;

pub use config::Config;
