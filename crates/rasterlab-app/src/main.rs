//! Main application entry point.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting rasterlab");

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: rasterlab <script.json>");
        return ExitCode::from(2);
    };

    match rasterlab_app::run_file(Path::new(&path)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Script failed: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
