//! Modelsmith CLI - class-model extraction and code generation

mod cli;

use clap::Parser;
use modelsmith::core::logging::init_logging;

fn main() {
    // Parse CLI args first to get logging configuration
    let cli_args = cli::Cli::parse();

    // Initialize logging early; the app reinitializes with CLI flags if needed
    if let Err(e) = init_logging(None, None) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::ModelsmithApp::new();

    if let Err(e) = app.run(cli_args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
