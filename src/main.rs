use langin_tests::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Run the harness; the outcome decides the exit code
    match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
