//! Configuration management for the Master Server

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Where uploads land, named as originally submitted (plus timestamp).
    pub upload_dir: PathBuf,

    /// Public area serving mastered copies by generated name.
    pub master_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("./uploads"),
                master_dir: PathBuf::from("./master"),
            },
        }
    }
}

impl Config {
    /// Build configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .unwrap_or(5000),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./uploads")),
                master_dir: env::var("MASTER_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./master")),
            },
        }
    }
}
