use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl EnderError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            EnderError::IoError(e) => format!("Could not read configuration file: {}", e),
            EnderError::TomlError(_) => "Configuration file is not valid TOML".to_string(),
            EnderError::ConfigValidationError { field, .. }
            | EnderError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, self)
            }
        }
    }

    /// 對應的程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            EnderError::IoError(_) => 3,
            EnderError::TomlError(_)
            | EnderError::ConfigValidationError { .. }
            | EnderError::InvalidConfigValueError { .. } => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = EnderError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        assert_eq!(io.exit_code(), 3);

        let invalid = EnderError::InvalidConfigValueError {
            field: "customers".to_string(),
            value: "abc".to_string(),
            reason: "Customer number must be an integer".to_string(),
        };
        assert_eq!(invalid.exit_code(), 2);

        let duplicate = EnderError::ConfigValidationError {
            field: "customers".to_string(),
            message: "Keys '01' and '1' both map customer 1".to_string(),
        };
        assert_eq!(duplicate.exit_code(), 2);
        assert!(invalid.user_friendly_message().contains("customers"));
    }
}
