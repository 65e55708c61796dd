//! Interactive shell: panel layout, chart rendering, raw-data table.
//! Consumes the derived [`Frame`](crate::data::Frame); holds no logic of
//! its own beyond widget wiring.

pub mod charts;
pub mod panels;
pub mod table;
