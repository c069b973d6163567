//! Startup configuration: flags, then `MASTERY_*` environment variables, then
//! built-in defaults.

use std::fmt;

use mastery_core::model::{Language, Theme};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_LATENCY_MS: u64 = 1_000;

const ENV_THEME: &str = "MASTERY_THEME";
const ENV_LANGUAGE: &str = "MASTERY_LANGUAGE";
const ENV_LATENCY_MS: &str = "MASTERY_LATENCY_MS";
const ENV_LOG: &str = "MASTERY_LOG";

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidPreference { flag: &'static str, source: mastery_core::Error },
    InvalidLatency { raw: String },
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidPreference { flag, source } => {
                write!(f, "invalid {flag} value: {source}")
            }
            ArgsError::InvalidLatency { raw } => write!(f, "invalid --latency-ms value: {raw}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    Launch(Config),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub language: Language,
    pub latency_ms: u64,
    pub log_filter: String,
    /// Environment values that were present but unreadable. Reported once
    /// logging is up.
    pub ignored_env: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            language: Language::default(),
            latency_ms: DEFAULT_LATENCY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            ignored_env: Vec::new(),
        }
    }
}

impl Config {
    /// Defaults overlaid with whatever `env` can read.
    pub fn from_env(env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = env(ENV_THEME) {
            match raw.parse::<Theme>() {
                Ok(theme) => config.theme = theme,
                Err(_) => config.ignored_env.push(format!("{ENV_THEME}={raw}")),
            }
        }
        if let Some(raw) = env(ENV_LANGUAGE) {
            match raw.parse::<Language>() {
                Ok(language) => config.language = language,
                Err(_) => config.ignored_env.push(format!("{ENV_LANGUAGE}={raw}")),
            }
        }
        if let Some(raw) = env(ENV_LATENCY_MS) {
            match raw.trim().parse::<u64>() {
                Ok(latency_ms) => config.latency_ms = latency_ms,
                Err(_) => config.ignored_env.push(format!("{ENV_LATENCY_MS}={raw}")),
            }
        }
        if let Some(raw) = env(ENV_LOG) {
            if is_valid_filter(&raw) {
                config.log_filter = raw;
            } else {
                config.ignored_env.push(format!("{ENV_LOG}={raw}"));
            }
        }

        config
    }
}

/// Whether `raw` is a directive list `EnvFilter` accepts. Blank counts as
/// invalid: it would silence everything.
fn is_valid_filter(raw: &str) -> bool {
    !raw.trim().is_empty() && EnvFilter::try_new(raw).is_ok()
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

/// Parse `argv` (without the program name) on top of `base`.
pub fn parse_args(
    argv: impl IntoIterator<Item = String>,
    base: Config,
) -> Result<Invocation, ArgsError> {
    let mut args = argv.into_iter().peekable();
    let mut config = base;

    // `ui` is the only subcommand and the default one.
    if let Some(first) = args.peek() {
        if !first.starts_with('-') {
            if first != "ui" {
                return Err(ArgsError::UnknownSubcommand(first.clone()));
            }
            args.next();
        }
    }

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => {
                let value = require_value(&mut args, "--theme")?;
                config.theme = value
                    .parse()
                    .map_err(|err| ArgsError::InvalidPreference {
                        flag: "--theme",
                        source: mastery_core::Error::from(err),
                    })?;
            }
            "--language" => {
                let value = require_value(&mut args, "--language")?;
                config.language = value
                    .parse()
                    .map_err(|err| ArgsError::InvalidPreference {
                        flag: "--language",
                        source: mastery_core::Error::from(err),
                    })?;
            }
            "--latency-ms" => {
                let value = require_value(&mut args, "--latency-ms")?;
                config.latency_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| ArgsError::InvalidLatency { raw: value.clone() })?;
            }
            "--log" => {
                let value = require_value(&mut args, "--log")?;
                if !is_valid_filter(&value) {
                    return Err(ArgsError::InvalidLogFilter { raw: value });
                }
                config.log_filter = value;
            }
            "--help" | "-h" => return Ok(Invocation::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Invocation::Launch(config))
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [ui] [--theme light|dark] [--language fa|en] [--latency-ms <n>] [--log <filter>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --theme {}", Theme::default());
    eprintln!("  --language {}", Language::default());
    eprintln!("  --latency-ms {DEFAULT_LATENCY_MS}");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_THEME}, {ENV_LANGUAGE}, {ENV_LATENCY_MS}, {ENV_LOG}");
}

#[cfg(test)]
mod tests {
    use mastery_core::model::PreferenceParseError;

    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    fn launch(result: Result<Invocation, ArgsError>) -> Config {
        match result {
            Ok(Invocation::Launch(config)) => config,
            other => panic!("expected launch, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_use_defaults() {
        let config = launch(parse_args(argv(&[]), Config::default()));
        assert_eq!(config, Config::default());
        assert_eq!(config.latency_ms, 1_000);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn ui_subcommand_is_optional() {
        let with = launch(parse_args(argv(&["ui", "--theme", "dark"]), Config::default()));
        let without = launch(parse_args(argv(&["--theme", "dark"]), Config::default()));
        assert_eq!(with, without);
        assert_eq!(with.theme, Theme::Dark);
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "MASTERY_THEME" => Some("dark".to_string()),
            "MASTERY_LATENCY_MS" => Some("250".to_string()),
            _ => None,
        };
        let config = launch(parse_args(
            argv(&["--theme", "light", "--language", "en"]),
            Config::from_env(env),
        ));
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, Language::En);
        assert_eq!(config.latency_ms, 250);
    }

    #[test]
    fn unreadable_environment_is_ignored() {
        let env = |key: &str| match key {
            "MASTERY_LANGUAGE" => Some("klingon".to_string()),
            "MASTERY_LATENCY_MS" => Some("soon".to_string()),
            _ => None,
        };
        let config = Config::from_env(env);
        assert_eq!(config.language, Language::Fa);
        assert_eq!(config.latency_ms, DEFAULT_LATENCY_MS);
        assert_eq!(config.ignored_env.len(), 2);
    }

    #[test]
    fn invalid_flags_are_errors() {
        assert_eq!(
            parse_args(argv(&["--theme", "sepia"]), Config::default()),
            Err(ArgsError::InvalidPreference {
                flag: "--theme",
                source: mastery_core::Error::Preference(PreferenceParseError::Theme(
                    "sepia".to_string()
                )),
            })
        );
        assert!(matches!(
            parse_args(argv(&["--language", "de"]), Config::default()),
            Err(ArgsError::InvalidPreference { flag: "--language", .. })
        ));
        assert_eq!(
            parse_args(argv(&["--latency-ms", "-5"]), Config::default()),
            Err(ArgsError::InvalidLatency { raw: "-5".to_string() })
        );
        assert_eq!(
            parse_args(argv(&["--log"]), Config::default()),
            Err(ArgsError::MissingValue { flag: "--log" })
        );
        assert_eq!(
            parse_args(argv(&["--verbose"]), Config::default()),
            Err(ArgsError::UnknownArg("--verbose".to_string()))
        );
        assert_eq!(
            parse_args(argv(&["seed"]), Config::default()),
            Err(ArgsError::UnknownSubcommand("seed".to_string()))
        );
    }

    #[test]
    fn unparsable_log_flag_is_an_error() {
        assert_eq!(
            parse_args(argv(&["--log", "[[["]), Config::default()),
            Err(ArgsError::InvalidLogFilter { raw: "[[[".to_string() })
        );
        assert_eq!(
            parse_args(argv(&["--log", "  "]), Config::default()),
            Err(ArgsError::InvalidLogFilter { raw: "  ".to_string() })
        );
        let config = launch(parse_args(
            argv(&["--log", "ui=debug,services=warn"]),
            Config::default(),
        ));
        assert_eq!(config.log_filter, "ui=debug,services=warn");
    }

    #[test]
    fn unparsable_log_environment_is_ignored() {
        let env = |key: &str| (key == "MASTERY_LOG").then(|| "[[[".to_string());
        let config = Config::from_env(env);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.ignored_env, vec!["MASTERY_LOG=[[[".to_string()]);
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(
            parse_args(argv(&["--help", "--bogus"]), Config::default()),
            Ok(Invocation::Help)
        );
    }
}
