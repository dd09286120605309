//! Local data models.

pub mod widget;

pub use widget::{ProductTableWidget, TableColumn, WidgetSettings};
