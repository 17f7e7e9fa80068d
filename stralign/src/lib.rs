use log::{LevelFilter, debug};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

pub mod align;
pub mod distance;
mod input;
pub mod rank;

fn initialise_logging(log_level: LevelFilter) {
    // Tests run several commands in the same process.
    if let Err(error) = TermLogger::init(
        log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        debug!("Logger already initialised: {error}");
    }
}
