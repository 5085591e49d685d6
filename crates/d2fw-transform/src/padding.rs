//! Padding of converted values to their declared field length.

use d2fw_model::OutputFormat;

/// Pad `value` to `length` characters.
///
/// Integer and Decimal values are left-padded with `0`; every other format
/// is right-padded with spaces. A value already longer than `length` is
/// returned unchanged, never truncated. Width is counted in characters.
pub fn pad(value: &str, format: OutputFormat, length: usize) -> String {
    if format.is_numeric() {
        format!("{value:0>length$}")
    } else {
        format!("{value:<length$}")
    }
}

/// Number of characters `value` occupies in an output line.
pub fn display_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_formats_pad_left_with_zeros() {
        assert_eq!(pad("42", OutputFormat::Integer, 6), "000042");
        assert_eq!(pad("136", OutputFormat::Decimal, 5), "00136");
        assert_eq!(pad("", OutputFormat::Integer, 3), "000");
    }

    #[test]
    fn other_formats_pad_right_with_spaces() {
        assert_eq!(pad("abc", OutputFormat::Text, 6), "abc   ");
        assert_eq!(pad("0142", OutputFormat::Time, 6), "0142  ");
        assert_eq!(pad("", OutputFormat::DateDdMmYyyy, 8), "        ");
    }

    #[test]
    fn overlong_values_are_not_truncated() {
        assert_eq!(pad("123456", OutputFormat::Integer, 4), "123456");
        assert_eq!(pad("abcdef", OutputFormat::Text, 2), "abcdef");
        assert_eq!(pad("x", OutputFormat::Text, 0), "x");
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(pad("é", OutputFormat::Text, 3), "é  ");
        assert_eq!(display_len("é  "), 3);
    }
}
