//! Binary entrypoint for the `giftdraw` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Settings may come from a `.env` file; a missing file is fine.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match giftdraw::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
