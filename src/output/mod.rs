//! Result rendering: machine-readable JSON and human-readable terminal.

mod json;
mod terminal;

pub use json::{questions_to_json, result_to_json};
pub use terminal::{render_questions, render_result};
