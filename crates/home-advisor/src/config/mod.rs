use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recommendation: RecommendationConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where recommendations are computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommenderMode {
    /// Score the CSV catalog in-process.
    Local,
    /// Delegate to a remote recommendation service.
    Remote { endpoint: String },
}

#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub mode: RecommenderMode,
    pub catalog_path: PathBuf,
    pub remote_retries: u8,
    pub simulated_delay: Duration,
}

impl RecommendationConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = env::var("APP_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/properties.csv"));

        let mode = match env::var("APP_RECOMMENDER")
            .unwrap_or_else(|_| "local".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "local" => RecommenderMode::Local,
            "remote" => {
                let endpoint = env::var("APP_REMOTE_ENDPOINT")
                    .ok()
                    .filter(|value| !value.trim().is_empty())
                    .ok_or(ConfigError::MissingRemoteEndpoint)?;
                RecommenderMode::Remote { endpoint }
            }
            other => return Err(ConfigError::InvalidRecommender(other.to_string())),
        };

        let remote_retries = parse_number("APP_REMOTE_RETRIES", 1)?;
        let delay_ms: u64 = parse_number("APP_SIMULATED_DELAY_MS", 0)?;

        Ok(Self {
            mode,
            catalog_path,
            remote_retries,
            simulated_delay: Duration::from_millis(delay_ms),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRecommender(String),
    MissingRemoteEndpoint,
    InvalidNumber { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRecommender(value) => write!(
                f,
                "APP_RECOMMENDER must be 'local' or 'remote' (got '{}')",
                value
            ),
            ConfigError::MissingRemoteEndpoint => write!(
                f,
                "APP_REMOTE_ENDPOINT is required when APP_RECOMMENDER=remote"
            ),
            ConfigError::InvalidNumber { key } => {
                write!(f, "{} must be a non-negative integer", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRecommender(_)
            | ConfigError::MissingRemoteEndpoint
            | ConfigError::InvalidNumber { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_CATALOG_PATH",
            "APP_RECOMMENDER",
            "APP_REMOTE_ENDPOINT",
            "APP_REMOTE_RETRIES",
            "APP_SIMULATED_DELAY_MS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.recommendation.mode, RecommenderMode::Local);
        assert_eq!(
            config.recommendation.catalog_path,
            PathBuf::from("data/properties.csv")
        );
        assert_eq!(config.recommendation.remote_retries, 1);
        assert!(config.recommendation.simulated_delay.is_zero());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn remote_mode_requires_endpoint() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_RECOMMENDER", "remote");
        let err = AppConfig::load().expect_err("endpoint required");
        assert!(matches!(err, ConfigError::MissingRemoteEndpoint));

        env::set_var("APP_REMOTE_ENDPOINT", "http://recs.internal/api/v1/recommendations");
        env::set_var("APP_REMOTE_RETRIES", "3");
        let config = AppConfig::load().expect("remote config loads");
        assert_eq!(
            config.recommendation.mode,
            RecommenderMode::Remote {
                endpoint: "http://recs.internal/api/v1/recommendations".to_string()
            }
        );
        assert_eq!(config.recommendation.remote_retries, 3);
        reset_env();
    }

    #[test]
    fn rejects_unknown_recommender_and_bad_numbers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_RECOMMENDER", "psychic");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidRecommender(_))
        ));

        reset_env();
        env::set_var("APP_SIMULATED_DELAY_MS", "soon");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidNumber {
                key: "APP_SIMULATED_DELAY_MS"
            })
        ));

        reset_env();
        env::set_var("APP_SIMULATED_DELAY_MS", "250");
        let config = AppConfig::load().expect("delay parses");
        assert_eq!(
            config.recommendation.simulated_delay,
            Duration::from_millis(250)
        );
        reset_env();
    }
}
