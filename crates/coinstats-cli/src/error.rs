use coinstats_core::{CoreError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_)
            | Self::Core(CoreError::Validation(_) | CoreError::UnknownCoin { .. }) => 2,
            Self::StrictModeViolation { .. } => 5,
            Self::Core(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_errors_exit_with_two() {
        let err = CliError::from(ValidationError::EmptyCoinId);
        assert_eq!(err.exit_code(), 2);

        let err = CliError::from(CoreError::UnknownCoin {
            coin: String::from("dogecoin"),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn load_failures_exit_with_ten() {
        let err = CliError::from(CoreError::Io(std::io::Error::other("gone")));
        assert_eq!(err.exit_code(), 10);
    }
}
