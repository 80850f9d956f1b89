//! Input checks shared by the services.

use shared::ChoreFrequency;

use super::errors::{DomainError, DomainResult};

/// Trim a name or title and check it is non-empty and within `max_len` characters
pub fn validate_label(field: &str, value: &str, max_len: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{} cannot be empty", field)));
    }
    if trimmed.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{} cannot exceed {} characters",
            field, max_len
        )));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text collapses to `None`
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `frequency_days` must be positive and is only allowed on weekly chores
pub fn validate_frequency_days(frequency: ChoreFrequency, frequency_days: Option<u32>) -> DomainResult<()> {
    match frequency_days {
        None => Ok(()),
        Some(0) => Err(DomainError::Validation(
            "frequency_days must be at least 1".to_string(),
        )),
        Some(days) if days > 7 => Err(DomainError::Validation(format!(
            "frequency_days cannot exceed 7 (got {})",
            days
        ))),
        Some(_) if !frequency.allows_frequency_days() => Err(DomainError::Validation(format!(
            "frequency_days is only allowed for weekly chores, not {}",
            frequency
        ))),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_label() {
        assert_eq!(validate_label("Child name", "  Emma ", 100).unwrap(), "Emma");
        assert!(validate_label("Child name", "   ", 100).is_err());
        assert!(validate_label("Child name", &"a".repeat(101), 100).is_err());
        assert!(validate_label("Child name", &"é".repeat(100), 100).is_ok());
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(normalize_optional(Some(" tablet ".to_string())), Some("tablet".to_string()));
    }

    #[test]
    fn test_validate_frequency_days() {
        assert!(validate_frequency_days(ChoreFrequency::Daily, None).is_ok());
        assert!(validate_frequency_days(ChoreFrequency::Weekly, Some(2)).is_ok());
        assert!(validate_frequency_days(ChoreFrequency::Weekly, Some(0)).is_err());
        assert!(validate_frequency_days(ChoreFrequency::Weekly, Some(8)).is_err());
        assert!(validate_frequency_days(ChoreFrequency::Daily, Some(2)).is_err());
        assert!(validate_frequency_days(ChoreFrequency::Once, Some(1)).is_err());
    }
}
