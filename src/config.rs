use std::env;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Replaces the built-in seed when set.
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Reads `HOST`, `PORT`, `STATIC_DIR` and `ACTIVITIES_SEED_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir: PathBuf = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();
        let seed_file = lookup("ACTIVITIES_SEED_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            static_dir,
            seed_file,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Second attempt when the configured port is taken.
    pub fn fallback_bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port.saturating_add(1))
    }
}
