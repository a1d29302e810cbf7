//! Configuration model for the widget builder
//!
//! The widget configuration lives only in memory: it is created when the
//! builder launches and discarded when the window closes. All mutation goes
//! through the operations on [`WidgetConfig`].

pub mod widget;

pub use widget::{ConfigUpdate, DataField, VisibleData, WidgetConfig, WidgetTemplate, WidgetTheme};
