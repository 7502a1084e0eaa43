use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::ffi::OsString;
use std::fmt;
use std::str::FromStr;

/// Upstream origin used when `UPSTREAM_BASE_URL` is not set.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://alqwassem-001-site1.stempurl.com";

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The origin of the family members REST API that every request is relayed to.
    /// Override in tests to point at a mock server.
    #[arg(short, long, env, default_value = DEFAULT_UPSTREAM_BASE_URL)]
    upstream_base_url: String,

    /// Directory holding the built browser client, served for any unmatched route.
    #[arg(long, env, default_value = "./public")]
    static_dir: String,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Builds a Config from an explicit argument list instead of the process arguments.
    /// Environment variables are still honored for anything not passed in `args`.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Config::parse_from(args)
    }

    pub fn set_upstream_base_url(mut self, upstream_base_url: String) -> Self {
        self.upstream_base_url = upstream_base_url;
        self
    }

    /// Returns the upstream origin without any trailing slash.
    pub fn upstream_base_url(&self) -> &str {
        self.upstream_base_url.trim_end_matches('/')
    }

    pub fn static_dir(&self) -> &str {
        &self.static_dir
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert_eq!("qa".parse::<RustEnv>(), Err(RustEnvParseError));
    }

    #[test]
    fn test_upstream_base_url_strips_trailing_slash() {
        let config = Config::from_args(["family_tree_rs"])
            .set_upstream_base_url("http://127.0.0.1:8080/".to_string());
        assert_eq!(config.upstream_base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_explicit_arguments_override_defaults() {
        let config = Config::from_args([
            "family_tree_rs",
            "--upstream-base-url",
            "https://example.org",
            "--runtime-env",
            "production",
            "--port",
            "8081",
        ]);
        assert_eq!(config.upstream_base_url(), "https://example.org");
        assert!(config.is_production());
        assert_eq!(config.port, 8081);
    }
}
