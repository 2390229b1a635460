use crate::utils::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};

/// Three consecutive digits of the padded number, value in `0..=999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    value: u16,
}

impl Group {
    pub const WIDTH: usize = 3;

    /// Builds a group from exactly three ASCII digit bytes.
    pub fn from_digits(digits: &[u8]) -> Result<Self> {
        if digits.len() != Self::WIDTH || !digits.iter().all(u8::is_ascii_digit) {
            return Err(ConvertError::invalid_input(
                &String::from_utf8_lossy(digits),
                "a group must be exactly three digits",
            ));
        }

        let value = digits
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
        Ok(Self { value })
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub fn hundreds(&self) -> usize {
        usize::from(self.value / 100)
    }

    /// Value of the last two digits, `0..=99`.
    pub fn last_two(&self) -> usize {
        usize::from(self.value % 100)
    }
}

/// Position of a group counted from the least significant one.
/// 0 is units, 1 thousand, 2 million, 3 billion, 4 trillion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Magnitude(usize);

impl Magnitude {
    pub const UNITS: Magnitude = Magnitude(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }

    pub fn is_units(&self) -> bool {
        self.0 == 0
    }
}

/// Outcome of spelling one input, as emitted by the batch runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConversionRecord {
    pub fn success(input: impl Into<String>, words: String) -> Self {
        Self {
            input: input.into(),
            words: Some(words),
            error: None,
        }
    }

    pub fn failure(input: impl Into<String>, error: &ConvertError) -> Self {
        Self {
            input: input.into(),
            words: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.words.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_from_digits() {
        let group = Group::from_digits(b"345").unwrap();
        assert_eq!(group.value(), 345);
        assert_eq!(group.hundreds(), 3);
        assert_eq!(group.last_two(), 45);
        assert!(!group.is_zero());

        assert!(Group::from_digits(b"000").unwrap().is_zero());
    }

    #[test]
    fn test_group_rejects_bad_width() {
        assert!(Group::from_digits(b"12").is_err());
        assert!(Group::from_digits(b"1234").is_err());
        assert!(Group::from_digits(b"1a3").is_err());
    }

    #[test]
    fn test_record_serializes_without_missing_fields() {
        let record = ConversionRecord::success("10", "ده".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"input":"10","words":"ده"}"#);
        assert!(record.is_success());
    }
}
