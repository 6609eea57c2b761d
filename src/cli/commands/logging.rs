use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Highest verbosity, maps to TRACE.
pub const MAX_VERBOSITY: u8 = 4;

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        // 0 (error) through 4 (trace), same scale as the -v count
        if let Ok(parsed) = level.parse::<u8>() {
            return if parsed <= MAX_VERBOSITY {
                Ok(parsed)
            } else {
                Err(format!("log level must be between 0 and {MAX_VERBOSITY}"))
            };
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE or 0-4 (default: ERROR)")
            .env("ROSTER_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
