mod index;
mod preload;
mod writer;

pub use index::{generate_init_file, render_index};
pub use preload::{directory_symbol, file_symbol, preload_statement};
pub use writer::{create_new_index, remove_old_index, write_index};
