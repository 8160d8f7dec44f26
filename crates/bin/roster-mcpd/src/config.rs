use clap::{Parser, builder::BoolishValueParser};
use roster_core::DEFAULT_CSV_PATH;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4020";

#[derive(Parser, Debug)]
#[command(name = "roster-mcpd", version, about = "Member roster MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "ROSTER_CSV_PATH", default_value = DEFAULT_CSV_PATH)]
    csv_path: PathBuf,

    #[arg(
        long = "stdio",
        env = "ROSTER_ENABLE_STDIO",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long = "http",
        env = "ROSTER_HTTP_SERVE",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    http_serve: bool,

    #[arg(long, env = "ROSTER_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    http_addr: SocketAddr,

    #[arg(
        long = "stateful",
        env = "ROSTER_HTTP_STATEFUL",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    http_stateful: bool,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub csv_path: PathBuf,
    pub enable_stdio: bool,
    pub http_serve: bool,
    pub http_addr: SocketAddr,
    pub http_stateful: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingSetting(&'static str),
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSetting(name) => write!(f, "missing required setting: {name}"),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl RosterConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for RosterConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.csv_path.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "ROSTER_CSV_PATH",
                value: args.csv_path.display().to_string(),
            });
        }

        if !args.enable_stdio && !args.http_serve {
            return Err(ConfigError::MissingSetting(
                "ROSTER_ENABLE_STDIO or ROSTER_HTTP_SERVE",
            ));
        }

        Ok(Self {
            csv_path: args.csv_path,
            enable_stdio: args.enable_stdio,
            http_serve: args.http_serve,
            http_addr: args.http_addr,
            http_stateful: args.http_stateful,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            enable_stdio: true,
            http_serve: false,
            http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            http_stateful: true,
        }
    }

    #[test]
    fn defaults_to_stdio_on_members_csv() {
        let config = RosterConfig::try_from(base_args()).expect("config should parse");

        assert!(config.enable_stdio);
        assert!(!config.http_serve);
        assert_eq!(config.csv_path, PathBuf::from("members.csv"));
    }

    #[test]
    fn rejects_blank_csv_path() {
        let mut args = base_args();
        args.csv_path = PathBuf::from("  ");

        let err = RosterConfig::try_from(args).expect_err("blank path is invalid");
        assert!(matches!(err, ConfigError::InvalidSetting { name: "ROSTER_CSV_PATH", .. }));
    }

    #[test]
    fn requires_a_transport() {
        let mut args = base_args();
        args.enable_stdio = false;

        let err = RosterConfig::try_from(args).expect_err("no transport enabled");
        assert!(matches!(err, ConfigError::MissingSetting(_)));
    }

    #[test]
    fn parses_flags_and_values() {
        let args = CliArgs::try_parse_from([
            "roster-mcpd",
            "--csv-path",
            "club.csv",
            "--http",
            "true",
            "--stdio",
            "false",
        ])
        .expect("args should parse");
        let config = RosterConfig::try_from(args).expect("config should parse");

        assert!(config.http_serve);
        assert!(!config.enable_stdio);
        assert_eq!(config.csv_path, PathBuf::from("club.csv"));
    }
}
