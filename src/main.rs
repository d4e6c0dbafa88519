use log::LevelFilter;

use emulator_host::LIBRARY_PATH;

fn main() {
    // the success path never returns
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1)
    }
}

fn run() -> emulator_host::Result<()> {
    // silent unless RUST_LOG asks otherwise; stdout/stderr carry a fixed contract
    let mut logger = pretty_env_logger::formatted_timed_builder();
    logger.format_timestamp_millis().filter_level(LevelFilter::Off);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        logger.parse_filters(&filters);
    }
    logger.init();

    // command line arguments are deliberately not consulted
    match emulator_host::host(LIBRARY_PATH)? {}
}
