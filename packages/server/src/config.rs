// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Port, CORS origin, and storage path overrides with defaults

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

use tasklet_core::constants;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub tasks_file: PathBuf,
    pub seed_db_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str =
            env::var(constants::TASKLET_API_PORT).unwrap_or_else(|_| "8000".to_string());

        let port = port_str.parse::<u16>()?;

        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin = env::var(constants::CORS_ORIGIN)
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        let tasks_file = env::var(constants::TASKLET_TASKS_FILE)
            .map(PathBuf::from)
            .unwrap_or_else(|_| tasklet_core::tasks_file());

        let seed_db_file = env::var(constants::TASKLET_SEED_DB)
            .map(PathBuf::from)
            .unwrap_or_else(|_| tasklet_core::seed_db_file());

        Ok(Config {
            port,
            cors_origin,
            tasks_file,
            seed_db_file,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes env mutation across config tests
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());
        env::remove_var(constants::TASKLET_API_PORT);
        env::remove_var(constants::CORS_ORIGIN);

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors_origin, "http://localhost:5173");
        assert!(config.tasks_file.ends_with("tasks.json"));
        assert!(config.seed_db_file.ends_with("seed.db"));
    }

    #[test]
    fn test_port_override_and_validation() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|p| p.into_inner());

        env::set_var(constants::TASKLET_API_PORT, "9000");
        assert_eq!(Config::from_env().unwrap().port, 9000);

        env::set_var(constants::TASKLET_API_PORT, "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::PortOutOfRange(0))
        ));

        env::set_var(constants::TASKLET_API_PORT, "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        env::remove_var(constants::TASKLET_API_PORT);
    }
}
