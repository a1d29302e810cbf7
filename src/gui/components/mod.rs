//! Controls panel sections and the live preview
//!
//! Each section is a function taking the configuration and returning whether
//! it changed anything this frame.

pub mod data_settings;
pub mod project_settings;
pub mod style_settings;
pub mod template_selector;
pub mod widget_preview;
