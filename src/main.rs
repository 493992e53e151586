use clap::Parser;
use initgen::cli::{run_generate, Args};

fn main() {
    let args = Args::parse();

    if let Err(e) = run_generate(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
