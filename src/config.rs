use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub max_players_per_session: usize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let max_players_per_session = env_map
            .get("MAX_PLAYERS_PER_SESSION")
            .map(|s| s.as_str())
            .unwrap_or("64")
            .parse::<usize>()
            .map_err(|_| {
                ConfigError::InvalidValue(
                    "MAX_PLAYERS_PER_SESSION".to_string(),
                    "must be a positive integer".to_string(),
                )
            })?;

        if max_players_per_session == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_PLAYERS_PER_SESSION".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            port,
            max_players_per_session,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_players_per_session, 64);
    }

    #[test]
    fn test_invalid_port() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "not_a_number".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "PORT"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_invalid_max_players() {
        let mut env_map = HashMap::new();
        env_map.insert("MAX_PLAYERS_PER_SESSION".to_string(), "0".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "MAX_PLAYERS_PER_SESSION"),
            _ => panic!("Expected InvalidValue error"),
        }
    }

    #[test]
    fn test_overrides() {
        let mut env_map = HashMap::new();
        env_map.insert("PORT".to_string(), "3000".to_string());
        env_map.insert("MAX_PLAYERS_PER_SESSION".to_string(), "12".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_players_per_session, 12);
    }
}
