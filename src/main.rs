//! tldr terminal frontend.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tldr::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
