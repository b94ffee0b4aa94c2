//! Server configuration, read from the environment at startup.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path to the trained model artifact mapping movie ids to vectors.
    pub model_path: PathBuf,
}

impl ServerConfig {
    /// Reads configuration from `REELRANK_HOST`, `REELRANK_PORT` and
    /// `REELRANK_MODEL_PATH`, falling back to defaults where unset.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("REELRANK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match env::var("REELRANK_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("REELRANK_PORT is not a valid port number: {}", raw))?,
            Err(_) => 3000,
        };
        let model_path = PathBuf::from(
            env::var("REELRANK_MODEL_PATH").unwrap_or_else(|_| "./model.json".to_string()),
        );

        Ok(ServerConfig { host, port, model_path })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            model_path: PathBuf::from("./model.json"),
        }
    }
}
