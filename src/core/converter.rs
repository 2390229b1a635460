//! Spelling of non-negative integers in Persian.
//!
//! The input is split into three-digit groups, most significant first. Each
//! non-zero group is spelled on its own, followed by its magnitude word
//! (هزار, میلیون, ...), and the group phrases are joined with «و».

use crate::core::padding::{group_count, pad_string, PaddingOrder};
use crate::core::tables::{
    HUNDREDS, MAGNITUDE_SUFFIXES, MAX_DIGITS, ONES, SEPARATOR, TEENS, TENS, ZERO,
};
use crate::domain::model::{Group, Magnitude};
use crate::domain::ports::NumberSpeller;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_digit_string, validate_max_length};

/// Persian number speller
#[derive(Debug, Clone, Copy, Default)]
pub struct PersianNumberConverter;

impl PersianNumberConverter {
    pub fn new() -> Self {
        Self
    }

    /// Spells a decimal digit string as Persian words.
    ///
    /// # Errors
    /// - `InvalidInput` if `digits` is empty or contains anything other than `0-9`
    /// - `UnsupportedMagnitude` if it has more than fifteen digits
    ///
    /// # Examples
    /// ```
    /// # use persian_words::PersianNumberConverter;
    /// let words = PersianNumberConverter::convert("12345").unwrap();
    /// assert_eq!(words, "دوازده هزار و سیصد و چهل و پنج");
    /// ```
    pub fn convert(digits: &str) -> Result<String> {
        validate_digit_string(digits)?;

        // any run of zeros is صفر, even one longer than MAX_DIGITS
        if digits.bytes().all(|b| b == b'0') {
            return Ok(ZERO.to_string());
        }

        validate_max_length(digits, MAX_DIGITS)?;

        // most significant group first, so magnitude counts down
        let groups = Self::split_groups(digits)?;
        let count = groups.len();
        let phrases = groups
            .iter()
            .enumerate()
            .map(|(i, group)| Self::render_group(group, Magnitude::new(count - 1 - i)))
            .collect::<Result<Vec<_>>>()?;

        let words = join_non_empty(&phrases, SEPARATOR);
        tracing::trace!(input = digits, groups = count, "spelled number");
        Ok(words)
    }

    /// Left-pads `digits` to a multiple of three and cuts it into groups.
    fn split_groups(digits: &str) -> Result<Vec<Group>> {
        let count = group_count(digits.len());
        let padded = pad_string(digits, '0', count * Group::WIDTH, PaddingOrder::Left);

        padded
            .as_bytes()
            .chunks(Group::WIDTH)
            .map(Group::from_digits)
            .collect()
    }

    /// Spells one group with its magnitude word. A zero group yields an empty phrase.
    fn render_group(group: &Group, magnitude: Magnitude) -> Result<String> {
        if group.is_zero() {
            return Ok(String::new());
        }

        let mut fragments: Vec<&str> = Vec::with_capacity(3);

        let hundreds = group.hundreds();
        if hundreds != 0 {
            fragments.push(HUNDREDS[hundreds]);
        }

        let last_two = group.last_two();
        if (10..20).contains(&last_two) {
            // یازده..نوزده are single words, never "ده و یک"
            fragments.push(TEENS[last_two - 10]);
        } else {
            let (tens, ones) = (last_two / 10, last_two % 10);
            if tens != 0 {
                fragments.push(TENS[tens]);
            }
            if ones != 0 {
                fragments.push(ONES[ones]);
            }
        }

        let phrase = fragments.join(SEPARATOR);
        if magnitude.is_units() {
            return Ok(phrase);
        }

        let suffix = MAGNITUDE_SUFFIXES
            .get(magnitude.index())
            .ok_or(ConvertError::UnsupportedMagnitude {
                digits: (magnitude.index() + 1) * Group::WIDTH,
                max_digits: MAX_DIGITS,
            })?;
        Ok(format!("{} {}", phrase, suffix))
    }
}

impl NumberSpeller for PersianNumberConverter {
    fn spell(&self, digits: &str) -> Result<String> {
        Self::convert(digits)
    }
}

/// Joins the non-empty entries of `parts` with `separator`.
pub fn join_non_empty<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut joined = String::new();
    for part in parts.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()) {
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(part);
    }
    joined
}

/// Spells `digits` as Persian words.
pub fn convert_to_words(digits: &str) -> Result<String> {
    PersianNumberConverter::convert(digits)
}

/// Like [`convert_to_words`], treating a missing value as invalid input.
pub fn convert_optional(digits: Option<&str>) -> Result<String> {
    match digits {
        Some(digits) => convert_to_words(digits),
        None => Err(ConvertError::invalid_input("", "no value was provided")),
    }
}
