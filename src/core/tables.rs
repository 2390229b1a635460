//! Persian number words.

pub const ZERO: &str = "صفر";

/// Joins word fragments and group phrases.
pub const CONJUNCTION: &str = "و";

/// Fragment separator, the conjunction surrounded by spaces.
pub const SEPARATOR: &str = " و ";

pub static ONES: [&str; 10] = ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"];

/// Indexed by `value - 10` for values in `10..=19`.
pub static TEENS: [&str; 10] = [
    "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

pub static TENS: [&str; 10] = ["", "ده", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود"];

pub static HUNDREDS: [&str; 10] = [
    "", "صد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

pub const MAGNITUDE_COUNT: usize = 5;

/// Indexed by magnitude. The units slot is never emitted.
pub static MAGNITUDE_SUFFIXES: [&str; MAGNITUDE_COUNT] = ["", "هزار", "میلیون", "میلیارد", "تیلیارد"];

/// Largest number of digits whose groups all have a suffix.
pub const MAX_DIGITS: usize = MAGNITUDE_COUNT * 3;

/// Every word the converter can emit.
pub fn vocabulary() -> impl Iterator<Item = &'static str> {
    ONES.iter()
        .chain(TEENS.iter())
        .chain(TENS.iter())
        .chain(HUNDREDS.iter())
        .chain(MAGNITUDE_SUFFIXES.iter())
        .copied()
        .filter(|word| !word.is_empty())
        .chain([ZERO, CONJUNCTION])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_digits_covers_trillions() {
        assert_eq!(MAX_DIGITS, 15);
    }

    #[test]
    fn test_vocabulary_has_no_blank_or_multiword_entries() {
        for word in vocabulary() {
            assert!(!word.is_empty());
            assert!(!word.contains(' '), "'{}' should be a single token", word);
        }
        assert!(vocabulary().any(|w| w == CONJUNCTION));
    }
}
