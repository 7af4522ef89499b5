/// Helper utilities.
mod text;

pub use text::excerpt;
pub(crate) use text::{is_blank, truncate_chars};
