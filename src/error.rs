use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while running an agent-vs-agent match.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("agent '{agent}' returned a state that is not a legal successor")]
    IllegalMove { agent: String },

    #[error("game ended without an outcome")]
    MissingOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search.depth_2d must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search.depth_2d must be >= 1"
        );
    }

    #[test]
    fn test_match_error_display() {
        let err = MatchError::IllegalMove {
            agent: "Random".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "agent 'Random' returned a state that is not a legal successor"
        );
    }
}
