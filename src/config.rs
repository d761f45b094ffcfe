//! Server configuration
//!
//! Read from the environment (a `.env` file is loaded first if present):
//!   PORT            — listen port (default: 3000)
//!   GUEST_LIST_PATH — seating plan CSV (default: guestlist.csv)
//!   STATIC_DIR      — front-end files (default: public)

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GUEST_LIST_PATH: &str = "guestlist.csv";
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub guest_list_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            guest_list_path: PathBuf::from(DEFAULT_GUEST_LIST_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults; an
    /// unparseable port is logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|e| {
                tracing::warn!("Invalid PORT '{}', using {}: {}", raw, DEFAULT_PORT, e);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let guest_list_path = lookup("GUEST_LIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_GUEST_LIST_PATH));

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Self {
            port,
            guest_list_path,
            static_dir,
        }
    }
}
