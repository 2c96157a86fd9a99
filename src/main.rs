//! shapes - compute shape areas with the Visitor pattern

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = visitor_shapes::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
