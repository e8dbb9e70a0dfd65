//! Common utilities shared across modules

pub mod text;

pub use text::{indent_width, line_of_offset, split_top_level, title_case};
