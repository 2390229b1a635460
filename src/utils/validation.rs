use crate::utils::error::{ConvertError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that `input` is a non-empty run of ASCII digits.
///
/// `char::is_ascii_digit` is used rather than `char::is_numeric` so that
/// Persian or Arabic-Indic digits are rejected instead of silently accepted.
pub fn validate_digit_string(input: &str) -> Result<()> {
    if input.is_empty() {
        return Err(ConvertError::invalid_input(input, "input is empty"));
    }

    if let Some((position, ch)) = input.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(ConvertError::invalid_input(
            input,
            format!("non-digit character '{}' at byte {}", ch, position),
        ));
    }

    Ok(())
}

pub fn validate_max_length(input: &str, max_digits: usize) -> Result<()> {
    if input.len() > max_digits {
        return Err(ConvertError::UnsupportedMagnitude {
            digits: input.len(),
            max_digits,
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_digit_string() {
        assert!(validate_digit_string("0").is_ok());
        assert!(validate_digit_string("000123").is_ok());
        assert!(validate_digit_string("").is_err());
        assert!(validate_digit_string("12a3").is_err());
        assert!(validate_digit_string("-5").is_err());
        assert!(validate_digit_string(" 12").is_err());
        assert!(validate_digit_string("1,000").is_err());
    }

    #[test]
    fn test_validate_digit_string_rejects_non_ascii_digits() {
        assert!(validate_digit_string("۱۲۳").is_err());
        assert!(validate_digit_string("١٢").is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("123456789012345", 15).is_ok());
        match validate_max_length("1234567890123456", 15) {
            Err(ConvertError::UnsupportedMagnitude { digits, max_digits }) => {
                assert_eq!(digits, 16);
                assert_eq!(max_digits, 15);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }
}
