mod app;
mod charts;
mod color;
mod config;
mod data;
mod error;
mod geo;
mod state;
mod summary;

use std::process::ExitCode;

use app::ReportApp;

fn main() -> ExitCode {
    env_logger::init();

    match ReportApp::default().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
