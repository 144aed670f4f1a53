//! The binary only calls `cli::run()` and turns an error into exit code 1.
//! Parsing, context wiring, logging setup and rendering all live in `cli/`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
