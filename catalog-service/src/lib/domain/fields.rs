use thiserror::Error;

/// Error for bounded free-text fields (names, titles).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} too long: maximum {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Trim `value` and check it holds between 1 and `max` characters.
pub(crate) fn bounded_text(
    field: &'static str,
    value: String,
    max: usize,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        Err(FieldError::Empty { field })
    } else if length > max {
        Err(FieldError::TooLong {
            field,
            max,
            actual: length,
        })
    } else if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_text() {
        assert_eq!(bounded_text("title", "Clean Code".to_string(), 50), Ok("Clean Code".to_string()));
        assert_eq!(bounded_text("title", "  Refactoring ".to_string(), 50), Ok("Refactoring".to_string()));
        assert_eq!(
            bounded_text("title", "   ".to_string(), 50),
            Err(FieldError::Empty { field: "title" })
        );
        assert_eq!(
            bounded_text("title", "x".repeat(51), 50),
            Err(FieldError::TooLong { field: "title", max: 50, actual: 51 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 50 Cyrillic letters are 100 bytes
        assert!(bounded_text("name", "ж".repeat(50), 50).is_ok());
    }
}
