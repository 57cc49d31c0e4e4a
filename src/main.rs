use crate::core::system::System;
use macros::log;
use std::process::ExitCode;

mod core;
mod interface;
mod model;
mod platform;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> ExitCode {
    let system = match System::initialize().await {
        Ok(system) => system,
        Err(err) => {
            eprintln!("Failed to initialize: {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = system.run().await;
    system.terminate().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!(err);
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
