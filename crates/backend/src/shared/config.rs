use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог собранного фронтенда (trunk build)
    pub dist_dir: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid server address {host}:{port}")]
    InvalidAddress { host: String, port: u16 },
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
dist_dir = "dist"
"#;

impl Config {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                host: self.host.clone(),
                port: self.port,
            })
    }

    /// Относительный путь считается от каталога исполняемого файла,
    /// если там такой каталог есть, иначе от текущего каталога
    pub fn resolve_dist_dir(&self) -> PathBuf {
        let dist = Path::new(&self.dist_dir);
        if dist.is_absolute() {
            return dist.to_path_buf();
        }

        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
        {
            let candidate = exe_dir.join(dist);
            if candidate.is_dir() {
                return candidate;
            }
        }

        dist.to_path_buf()
    }
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
    {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Config::parse(&contents);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Config::parse(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(
            config.server.socket_addr().unwrap(),
            SocketAddr::from(([0, 0, 0, 0], 3000))
        );
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(Config::parse("[database]\npath = \"app.db\"\n").is_err());
    }

    #[test]
    fn test_invalid_host() {
        let server = ServerConfig {
            host: "not a host".into(),
            port: 8080,
            dist_dir: "dist".into(),
        };
        assert!(matches!(
            server.socket_addr(),
            Err(ConfigError::InvalidAddress { port: 8080, .. })
        ));
    }

    #[test]
    fn test_absolute_dist_dir_kept() {
        let dir = tempfile::tempdir().unwrap();
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 8080,
            dist_dir: dir.path().to_string_lossy().into_owned(),
        };
        assert_eq!(server.resolve_dist_dir(), dir.path());
    }
}
