use std::path::PathBuf;

use core_config::{FromEnv, env_or_default, server::ServerConfig};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where uploaded images land on disk and how they are served back.
#[derive(Clone, Debug)]
pub struct UploadConfig {
    /// Directory for stored images, created on first upload if missing
    pub dir: PathBuf,
}

impl UploadConfig {
    fn from_env() -> Self {
        Self {
            dir: PathBuf::from(env_or_default("UPLOAD_DIR", "uploads")),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub uploads: UploadConfig,
    pub cors_allowed_origin: String,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let uploads = UploadConfig::from_env();
        let cors_allowed_origin =
            env_or_default("CORS_ALLOWED_ORIGIN", "http://localhost:3000");

        Ok(Self {
            mongodb,
            server,
            uploads,
            cors_allowed_origin,
            environment,
        })
    }
}
