/// Side of the string that receives the fill characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingOrder {
    Left,
    Right,
}

/// Pads `input` with `ch` until it is `length` characters long.
///
/// Inputs already at or beyond `length` are returned unchanged.
pub fn pad_string(input: &str, ch: char, length: usize, order: PaddingOrder) -> String {
    let current = input.chars().count();
    if current >= length {
        return input.to_string();
    }

    let fill = length - current;
    let mut padded = String::with_capacity(input.len() + fill * ch.len_utf8());
    match order {
        PaddingOrder::Left => {
            padded.extend(std::iter::repeat(ch).take(fill));
            padded.push_str(input);
        }
        PaddingOrder::Right => {
            padded.push_str(input);
            padded.extend(std::iter::repeat(ch).take(fill));
        }
    }
    padded
}

/// Number of three-digit groups needed for `len` digits.
pub fn group_count(len: usize) -> usize {
    len.div_ceil(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_pad() {
        assert_eq!(pad_string("12345", '0', 6, PaddingOrder::Left), "012345");
        assert_eq!(pad_string("1", '0', 3, PaddingOrder::Left), "001");
    }

    #[test]
    fn test_right_pad() {
        assert_eq!(pad_string("12", '*', 5, PaddingOrder::Right), "12***");
    }

    #[test]
    fn test_pad_is_noop_when_long_enough() {
        assert_eq!(pad_string("123", '0', 3, PaddingOrder::Left), "123");
        assert_eq!(pad_string("12345", '0', 3, PaddingOrder::Left), "12345");
    }

    #[test]
    fn test_group_count_rounds_up() {
        assert_eq!(group_count(1), 1);
        assert_eq!(group_count(3), 1);
        assert_eq!(group_count(4), 2);
        assert_eq!(group_count(6), 2);
        assert_eq!(group_count(11), 4);
        assert_eq!(group_count(15), 5);
    }
}
