use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied numeric parameter failed to parse. Raised at the
    /// boundary, before any model is constructed.
    #[error("invalid value for {field}: '{value}' is not a number")]
    InvalidInput { field: &'static str, value: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A solver backend failed outside the normal termination statuses.
    /// Infeasible/unbounded terminations are not errors; they come back as
    /// solution statuses.
    #[error("solver error: {0}")]
    Solver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
