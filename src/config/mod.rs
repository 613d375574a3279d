// Configuration module entry point
// Loads layered configuration (defaults, optional file, environment)

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Config file used when no path is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; environment variables prefixed with `MOCK_`
    /// override it, using `__` between nested keys (`MOCK_SERVER__PORT=9090`).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_env(config_path, env_source())
    }

    fn load_with_env(
        config_path: &str,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(env)
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("logging.show_headers", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("mock.analysis_delay_ms", 1000)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// `MOCK_`-prefixed variables, `__` between nested keys
fn env_source() -> config::Environment {
    config::Environment::with_prefix("MOCK")
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn fake_env(vars: &[(&str, &str)]) -> config::Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        env_source().source(Some(vars))
    }

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert!(cfg.logging.show_headers);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.logging.access_log_file.is_none());
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert!(cfg.performance.max_connections.is_none());
        assert_eq!(cfg.mock.analysis_delay_ms, 1000);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = Config::load_from("does-not-exist/mock-config").unwrap();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );

        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.starts_with("Invalid address"));
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("mock-api-cfg-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9191\n\n[mock]\nanalysis_delay_ms = 5\n",
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9191);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.mock.analysis_delay_ms, 5);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = fake_env(&[
            ("MOCK_SERVER__PORT", "9393"),
            ("MOCK_PERFORMANCE__MAX_CONNECTIONS", "2"),
            ("MOCK_MOCK__ANALYSIS_DELAY_MS", "0"),
            ("MOCK_LOGGING__SHOW_HEADERS", "false"),
            ("OTHER_SERVER__PORT", "1"),
        ]);

        let cfg = Config::load_with_env("does-not-exist/mock-config", env).unwrap();
        assert_eq!(cfg.server.port, 9393);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.performance.max_connections, Some(2));
        assert_eq!(cfg.mock.analysis_delay_ms, 0);
        assert!(!cfg.logging.show_headers);
    }

    #[test]
    fn test_env_rejects_bad_value() {
        let env = fake_env(&[("MOCK_SERVER__PORT", "not-a-port")]);
        assert!(Config::load_with_env("does-not-exist/mock-config", env).is_err());
    }
}
