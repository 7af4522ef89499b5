//! Layout components.

mod columns;

pub use columns::{Column, ColumnProps, Columns, ColumnsProps};
