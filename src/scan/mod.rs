mod listing;
mod walker;

pub use listing::{list_directory, DirectoryListing};
pub use walker::parse_directory;
