pub mod json;
pub mod transcript;

pub use json::{export_json_to_path, import_json};
pub use transcript::append_transcript;
