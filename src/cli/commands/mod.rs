pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_PORT: &str = "port";
pub const ARG_USERS: &str = "users";
pub const ARG_BASE_URL: &str = "base-url";
pub const ARG_SESSION_TTL: &str = "session-ttl-seconds";
pub const ARG_REMEMBER_TTL: &str = "remember-ttl-seconds";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!(
            "{} - {}",
            env!("CARGO_PKG_VERSION"),
            crate::horaro::GIT_COMMIT_HASH
        )
        .into_boxed_str(),
    );

    let command = Command::new("horaro")
        .about("Timesheet portal login and session service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("HORARO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_USERS)
                .short('u')
                .long("users")
                .help("Path to the JSON user store consumed by the credential validator")
                .env("HORARO_USERS")
                .required(true),
        )
        .arg(
            Arg::new(ARG_BASE_URL)
                .long("base-url")
                .help("Public base URL of the portal, session cookies are marked Secure when it is https")
                .default_value("http://localhost:8080")
                .env("HORARO_BASE_URL"),
        )
        .arg(
            Arg::new(ARG_SESSION_TTL)
                .long("session-ttl-seconds")
                .help("Server-side lifetime of a session without remember-me")
                .default_value("43200")
                .env("HORARO_SESSION_TTL_SECONDS")
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new(ARG_REMEMBER_TTL)
                .long("remember-ttl-seconds")
                .help("Lifetime of a remember-me session and its persistent cookie")
                .default_value("1209600")
                .env("HORARO_REMEMBER_TTL_SECONDS")
                .value_parser(clap::value_parser!(i64)),
        );

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "horaro");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Timesheet portal login and session service".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_users() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "horaro",
            "--port",
            "8080",
            "--users",
            "/etc/horaro/users.json",
        ]);

        assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
        assert_eq!(
            matches.get_one::<String>(ARG_USERS).cloned(),
            Some("/etc/horaro/users.json".to_string())
        );
        assert_eq!(
            matches.get_one::<String>(ARG_BASE_URL).cloned(),
            Some("http://localhost:8080".to_string())
        );
        assert_eq!(matches.get_one::<i64>(ARG_SESSION_TTL).copied(), Some(43200));
        assert_eq!(
            matches.get_one::<i64>(ARG_REMEMBER_TTL).copied(),
            Some(1_209_600)
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("HORARO_PORT", Some("443")),
                ("HORARO_USERS", Some("/srv/users.json")),
                ("HORARO_BASE_URL", Some("https://timesheets.example.edu")),
                ("HORARO_SESSION_TTL_SECONDS", Some("600")),
                ("HORARO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["horaro"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_USERS).cloned(),
                    Some("/srv/users.json".to_string())
                );
                assert_eq!(
                    matches.get_one::<String>(ARG_BASE_URL).cloned(),
                    Some("https://timesheets.example.edu".to_string())
                );
                assert_eq!(matches.get_one::<i64>(ARG_SESSION_TTL).copied(), Some(600));
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
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("HORARO_LOG_LEVEL", Some(level)),
                    ("HORARO_USERS", Some("/srv/users.json")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["horaro"]);
                    assert_eq!(
                        matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("HORARO_LOG_LEVEL", None::<String>)], || {
                let mut args = vec![
                    "horaro".to_string(),
                    "--users".to_string(),
                    "/srv/users.json".to_string(),
                ];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_users_required() {
        temp_env::with_vars([("HORARO_USERS", None::<&str>)], || {
            let command = new();
            let result = command.try_get_matches_from(vec!["horaro"]);
            assert_eq!(
                result.map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }
}
