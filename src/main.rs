#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use log::error;

fn main() {
    env_logger::init();

    if let Err(err) = torus_life::run() {
        log_error("run", err);
        std::process::exit(1);
    }
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
