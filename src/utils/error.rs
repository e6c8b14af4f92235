use thiserror::Error;

#[derive(Error, Debug)]
pub enum HippodromeError {
    #[error("Name cannot be null.")]
    NullName,

    #[error("Name cannot be blank.")]
    BlankName,

    #[error("Speed cannot be negative.")]
    NegativeSpeed,

    #[error("Distance cannot be negative.")]
    NegativeDistance,

    #[error("{field} must be a finite number.")]
    NonFinite { field: &'static str },

    #[error("Horses cannot be null.")]
    NullHorses,

    #[error("Horses cannot be empty.")]
    EmptyHorses,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl HippodromeError {
    /// Process exit code used by the CLI when this error aborts a race.
    pub fn exit_code(&self) -> i32 {
        match self {
            HippodromeError::IoError(_) | HippodromeError::SerializationError(_) => 2,
            _ => 1,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            HippodromeError::NullName
                | HippodromeError::BlankName
                | HippodromeError::NegativeSpeed
                | HippodromeError::NegativeDistance
                | HippodromeError::NonFinite { .. }
                | HippodromeError::NullHorses
                | HippodromeError::EmptyHorses
        )
    }
}

pub type Result<T> = std::result::Result<T, HippodromeError>;
