use std::net::{IpAddr, SocketAddr};

const HOST: &str = "FREELANCE_DESK_HOST";
const PORT: &str = "FREELANCE_DESK_PORT";
const LATENCY_MS: &str = "FREELANCE_DESK_LATENCY_MS";
const SEED: &str = "FREELANCE_DESK_SEED";
const LOG: &str = "FREELANCE_DESK_LOG";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Simulated latency applied to every store call.
    pub latency_ms: u64,
    /// Seed the stores from the bundled fixtures on startup.
    pub seed: bool,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            latency_ms: 0,
            seed: true,
            log: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment after loading a `.env` file, if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            host: parsed(&lookup, HOST)?.unwrap_or(defaults.host),
            port: parsed(&lookup, PORT)?.unwrap_or(defaults.port),
            latency_ms: parsed(&lookup, LATENCY_MS)?.unwrap_or(defaults.latency_ms),
            seed: flag(&lookup, SEED)?.unwrap_or(defaults.seed),
            log: lookup(LOG)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log),
        })
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value: raw,
            }),
    }
}

fn flag(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw,
            reason: "expected true or false".to_string(),
        }),
    }
}
