//! Marble Ring entry point
//!
//! Runs as a RenderMan procedural program: requests arrive on stdin, RIB
//! goes to stdout, logs go to stderr (`RUST_LOG=info` for per-frame stats).

use std::io::{self, BufWriter};
use std::process::ExitCode;

use marble_ring::renderer::sink_for;
use marble_ring::{Driver, Settings};

fn main() -> ExitCode {
    env_logger::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "Marble Ring starting (seed {}, {} output)",
        settings.seed,
        settings.format.as_str()
    );

    let driver = Driver::new(&settings);
    let stdin = io::stdin().lock();
    let mut sink = sink_for(settings.format, BufWriter::new(io::stdout().lock()));

    match driver.run(stdin, &mut sink) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
