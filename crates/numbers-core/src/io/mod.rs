//! Text input and output for the sheet: edit logs in, Markdown and JSON out.

mod edits;
mod json;
mod markdown;

pub use edits::{parse_edits, read_edits};
pub use json::{sheet_to_json, write_json};
pub use markdown::{render_markdown, write_markdown};
