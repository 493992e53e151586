mod args;
mod output;
mod run;

pub use args::Args;
pub use output::{print_report, print_warning};
pub use run::run_generate;
