use thiserror::Error;

/// Error for parsing numeric record identifiers from external input.
///
/// Identifiers are assigned by persistence and are always positive.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordIdError {
    #[error("Invalid identifier format: {0}")]
    InvalidFormat(String),

    #[error("Identifier must be positive, got {0}")]
    NotPositive(i64),
}

impl RecordIdError {
    /// Parse a positive record identifier.
    ///
    /// # Errors
    /// * `InvalidFormat` - Not an integer
    /// * `NotPositive` - Zero or negative
    pub fn parse(s: &str) -> Result<i64, RecordIdError> {
        let id = s
            .trim()
            .parse::<i64>()
            .map_err(|e| RecordIdError::InvalidFormat(format!("{}: {}", s, e)))?;

        if id <= 0 {
            return Err(RecordIdError::NotPositive(id));
        }

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(RecordIdError::parse("42"), Ok(42));
    }

    #[test]
    fn test_parse_rejects_garbage_and_non_positive() {
        assert!(matches!(
            RecordIdError::parse("abc"),
            Err(RecordIdError::InvalidFormat(_))
        ));
        assert_eq!(RecordIdError::parse("0"), Err(RecordIdError::NotPositive(0)));
        assert_eq!(
            RecordIdError::parse("-3"),
            Err(RecordIdError::NotPositive(-3))
        );
    }
}
