//! Server settings
//!
//! Layered as defaults, then an optional TOML file, then `COURSE_CART_*`
//! environment variables, then command line flags.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shared::SharedError;

use crate::core::DEFAULT_MAX_ITEMS;
use crate::error::{WebServerError, WebServerResult};

pub const ENV_BIND: &str = "COURSE_CART_BIND";
pub const ENV_CATALOG: &str = "COURSE_CART_CATALOG";
pub const ENV_MAX_ITEMS: &str = "COURSE_CART_MAX_ITEMS";
pub const ENV_STATIC_DIR: &str = "COURSE_CART_STATIC_DIR";

/// Stylesheet and drag-and-drop script, relative to the working directory
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub catalog_path: Option<PathBuf>,
    pub max_items: usize,
    pub static_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            catalog_path: None,
            max_items: DEFAULT_MAX_ITEMS,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

/// Keys accepted in the TOML settings file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind_addr: Option<String>,
    catalog_path: Option<PathBuf>,
    max_items: Option<usize>,
    static_dir: Option<PathBuf>,
}

/// Values given explicitly on the command line.
///
/// `host` and `port` each replace only their half of the bind address.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub catalog_path: Option<PathBuf>,
    pub max_items: Option<usize>,
    pub static_dir: Option<PathBuf>,
}

impl Settings {
    /// Build settings from every layer, reading the process environment
    pub fn load(config_file: Option<&Path>, cli: CliOverrides) -> WebServerResult<Self> {
        let mut settings = Settings::default();

        if let Some(path) = config_file {
            let raw = std::fs::read_to_string(path).map_err(|e| {
                WebServerError::config(format!("failed to read {}: {e}", path.display()))
            })?;
            settings.apply_toml(&raw)?;
        }

        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.apply_cli(cli);
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_toml(&mut self, raw: &str) -> WebServerResult<()> {
        let file: FileSettings = toml::from_str(raw)
            .map_err(|e| WebServerError::config(format!("invalid settings file: {e}")))?;

        if let Some(v) = file.bind_addr {
            self.bind_addr = v;
        }
        if let Some(v) = file.catalog_path {
            self.catalog_path = Some(v);
        }
        if let Some(v) = file.max_items {
            self.max_items = v;
        }
        if let Some(v) = file.static_dir {
            self.static_dir = v;
        }
        Ok(())
    }

    /// Apply environment overrides through `lookup` so callers control the source
    pub fn apply_env<F>(&mut self, lookup: F) -> WebServerResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BIND) {
            self.bind_addr = v;
        }
        if let Some(v) = lookup(ENV_CATALOG) {
            self.catalog_path = Some(PathBuf::from(v));
        }
        if let Some(v) = lookup(ENV_MAX_ITEMS) {
            self.max_items = v.trim().parse().map_err(|_| SharedError::InvalidConfig {
                field: ENV_MAX_ITEMS.to_string(),
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup(ENV_STATIC_DIR) {
            self.static_dir = PathBuf::from(v);
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: CliOverrides) {
        if cli.host.is_some() || cli.port.is_some() {
            self.bind_addr = replace_bind_parts(&self.bind_addr, cli.host.as_deref(), cli.port);
        }
        if let Some(v) = cli.catalog_path {
            self.catalog_path = Some(v);
        }
        if let Some(v) = cli.max_items {
            self.max_items = v;
        }
        if let Some(v) = cli.static_dir {
            self.static_dir = v;
        }
    }

    pub fn validate(&self) -> WebServerResult<()> {
        if self.max_items == 0 {
            return Err(SharedError::InvalidConfig {
                field: "max_items".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> WebServerResult<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| WebServerError::config(format!("invalid bind address {}: {e}", self.bind_addr)))
    }
}

/// Swap the host and/or port of `host:port`, bracketing bare IPv6 hosts
fn replace_bind_parts(current: &str, host: Option<&str>, port: Option<u16>) -> String {
    let (current_host, current_port) = current.rsplit_once(':').unwrap_or((current, ""));

    let host = match host {
        Some(h) if h.contains(':') && !h.starts_with('[') => format!("[{h}]"),
        Some(h) => h.to_string(),
        None => current_host.to_string(),
    };
    let port = port.map_or_else(|| current_port.to_string(), |p| p.to_string());

    format!("{host}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.max_items, 7);
        assert!(settings.catalog_path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_layer() {
        let mut settings = Settings::default();
        settings
            .apply_toml("bind_addr = \"0.0.0.0:9000\"\nmax_items = 5\ncatalog_path = \"data/spring.json\"\n")
            .unwrap();

        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
        assert_eq!(settings.max_items, 5);
        assert_eq!(settings.catalog_path, Some(PathBuf::from("data/spring.json")));
        assert_eq!(settings.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let mut settings = Settings::default();
        assert!(settings.apply_toml("database_url = \"sqlite://x\"").is_err());
    }

    #[test]
    fn test_env_overrides_toml_and_cli_overrides_env() {
        let mut settings = Settings::default();
        settings.apply_toml("max_items = 5").unwrap();
        settings
            .apply_env(env_from(&[(ENV_MAX_ITEMS, "4"), (ENV_BIND, "127.0.0.1:7000")]))
            .unwrap();
        assert_eq!(settings.max_items, 4);

        settings.apply_cli(CliOverrides {
            max_items: Some(3),
            ..CliOverrides::default()
        });
        assert_eq!(settings.max_items, 3);
        assert_eq!(settings.bind_addr, "127.0.0.1:7000");
    }

    #[test]
    fn test_invalid_env_number() {
        let mut settings = Settings::default();
        let result = settings.apply_env(env_from(&[(ENV_MAX_ITEMS, "seven")]));
        assert!(matches!(
            result,
            Err(WebServerError::SharedError(SharedError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let settings = Settings {
            max_items: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_bind_address_rejected() {
        let settings = Settings {
            bind_addr: "not-an-address".into(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(WebServerError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("course-cart.toml");
        std::fs::write(&path, "static_dir = \"assets\"\n").unwrap();

        let settings = Settings::load(
            Some(&path),
            CliOverrides {
                port: Some(0),
                ..CliOverrides::default()
            },
        )
        .unwrap();

        assert_eq!(settings.static_dir, PathBuf::from("assets"));
        assert_eq!(settings.bind_addr, "127.0.0.1:0");
    }

    #[test]
    fn test_default_static_dir_is_relative() {
        assert_eq!(Settings::default().static_dir, PathBuf::from("./static"));
        assert!(Settings::default().static_dir.is_relative());
    }

    #[test]
    fn test_cli_host_alone_keeps_port() {
        let mut settings = Settings::default();
        settings.apply_cli(CliOverrides {
            host: Some("0.0.0.0".into()),
            ..CliOverrides::default()
        });
        assert_eq!(settings.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_cli_port_alone_keeps_env_host() {
        let mut settings = Settings::default();
        settings
            .apply_env(env_from(&[(ENV_BIND, "0.0.0.0:9000")]))
            .unwrap();
        settings.apply_cli(CliOverrides {
            port: Some(8081),
            ..CliOverrides::default()
        });
        assert_eq!(settings.bind_addr, "0.0.0.0:8081");
    }

    #[test]
    fn test_cli_port_alone_keeps_toml_host() {
        let mut settings = Settings::default();
        settings.apply_toml("bind_addr = \"10.0.0.5:9000\"").unwrap();
        settings.apply_cli(CliOverrides {
            port: Some(8081),
            ..CliOverrides::default()
        });
        assert_eq!(settings.bind_addr, "10.0.0.5:8081");
    }

    #[test]
    fn test_cli_host_and_port_replace_both() {
        let mut settings = Settings::default();
        settings.apply_cli(CliOverrides {
            host: Some("::1".into()),
            port: Some(3000),
            ..CliOverrides::default()
        });
        assert_eq!(settings.bind_addr, "[::1]:3000");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_without_bind_flags_keeps_address() {
        let mut settings = Settings::default();
        settings.apply_toml("bind_addr = \"[::1]:9000\"").unwrap();
        settings.apply_cli(CliOverrides::default());
        assert_eq!(settings.bind_addr, "[::1]:9000");

        settings.apply_cli(CliOverrides {
            port: Some(9001),
            ..CliOverrides::default()
        });
        assert_eq!(settings.bind_addr, "[::1]:9001");
    }
}
