use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "joke-api")]
#[command(about = "Serves a random joke as JSON")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Address to bind to [default: 0.0.0.0]")]
    pub bind: Option<IpAddr>,

    #[arg(long, help = "Port to listen on [default: 8080]")]
    pub port: Option<u16>,

    #[arg(long, help = "Path prefix the API is mounted under [default: /api]")]
    pub prefix: Option<String>,

    #[arg(long, help = "JSON file to read jokes from [default: ./jokes.json]")]
    pub jokes_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Defaults, then the config file if given, then flags. Validated.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::default();
        if let Some(path) = &self.config {
            config = config.with_file(&TomlConfig::from_file(path)?);
        }

        if let Some(bind) = self.bind {
            config.bind_address = bind;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = prefix.clone();
        }
        if let Some(jokes_file) = &self.jokes_file {
            config.jokes_file = jokes_file.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_args_default() {
        let cli = CliConfig::try_parse_from(["joke-api"]).unwrap();
        assert_eq!(cli.resolve().unwrap(), ServerConfig::default());
        assert!(!cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 9000\nprefix = \"/fun\"\n")
            .unwrap();

        let cli = CliConfig::try_parse_from([
            "joke-api",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--port",
            "9100",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.prefix, "/fun");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(CliConfig::try_parse_from(["joke-api", "--port", "--other"]).is_err());
        assert!(CliConfig::try_parse_from(["joke-api", "--port", "99999"]).is_err());
    }

    #[test]
    fn test_invalid_prefix_fails_resolve() {
        let cli = CliConfig::try_parse_from(["joke-api", "--prefix", "api"]).unwrap();
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file_fails_resolve() {
        let cli =
            CliConfig::try_parse_from(["joke-api", "--config", "/no/such/joke-api.toml"]).unwrap();
        assert!(cli.resolve().is_err());
    }
}
