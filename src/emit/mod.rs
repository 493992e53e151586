mod json;

pub use json::{render_json, JsonReport};
