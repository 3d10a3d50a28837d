use crate::utils::error::{Result, ScorerError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_min_len(field_name: &str, items: &[String], min_len: usize) -> Result<()> {
    if items.len() < min_len {
        return Err(ScorerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: items.len().to_string(),
            reason: format!("At least {} entries are required", min_len),
        });
    }
    Ok(())
}

/// Returns the first name that appears more than once.
pub fn find_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range() {
        assert!(validate_range("overs", 1, 1, 50).is_ok());
        assert!(validate_range("overs", 50, 1, 50).is_ok());
        assert!(validate_range("overs", 0, 1, 50).is_err());
        assert!(validate_range("overs", 51, 1, 50).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "India").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./scorecards").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "bad\0path").is_err());
    }

    #[test]
    fn test_find_duplicate() {
        let names = vec!["Rohit".to_string(), "Kohli".to_string(), "Rohit".to_string()];
        assert_eq!(find_duplicate(&names), Some("Rohit"));
        assert_eq!(find_duplicate(&names[..2]), None);
    }
}
