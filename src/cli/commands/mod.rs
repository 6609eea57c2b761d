pub mod logging;
pub mod webhook;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("roster")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("ROSTER_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = webhook::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "roster");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some(env!("CARGO_PKG_DESCRIPTION").to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_webhook() {
        temp_env::with_vars([("WEBHOOK_URL", None::<String>)], || {
            let command = new();
            let matches = command.get_matches_from(vec![
                "roster",
                "--port",
                "3000",
                "--webhook-url",
                "https://discord.com/api/webhooks/1/abc",
            ]);

            assert_eq!(matches.get_one::<u16>("port").copied(), Some(3000));
            assert_eq!(
                matches
                    .get_one::<String>(webhook::ARG_WEBHOOK_URL)
                    .map(ToString::to_string),
                Some("https://discord.com/api/webhooks/1/abc".to_string())
            );
        });
    }

    #[test]
    fn test_webhook_is_optional() {
        temp_env::with_vars([("WEBHOOK_URL", None::<String>)], || {
            let matches = new().get_matches_from(vec!["roster"]);
            assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
            assert!(matches
                .get_one::<String>(webhook::ARG_WEBHOOK_URL)
                .is_none());
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("WEBHOOK_URL", Some("https://discord.com/api/webhooks/2/xyz")),
                ("ROSTER_PORT", Some("443")),
                ("ROSTER_EMBED_TITLE", Some("Recruit")),
                ("ROSTER_EMBED_COLOR", Some("#FF0000")),
                ("ROSTER_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["roster"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches
                        .get_one::<String>(webhook::ARG_WEBHOOK_URL)
                        .map(ToString::to_string),
                    Some("https://discord.com/api/webhooks/2/xyz".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>(webhook::ARG_EMBED_TITLE)
                        .map(ToString::to_string),
                    Some("Recruit".to_string())
                );
                assert_eq!(
                    matches.get_one::<u32>(webhook::ARG_EMBED_COLOR).copied(),
                    Some(0x00FF_0000)
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ROSTER_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["roster"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars([("ROSTER_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["roster".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }
}
