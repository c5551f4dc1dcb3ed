//! Engineering units for resistance values.

/// Parse a resistance value with an optional magnitude suffix.
///
/// Accepts a leading numeric literal (sign, decimal point, and exponent
/// allowed) optionally followed by `k` (kilo, 1e3) or `M` (mega, 1e6).
/// Whitespace between the number and the suffix is permitted; no suffix
/// means the value is already in ohms.
///
/// Returns `None` when the text contains no parseable leading number
/// (blank lines included). Characters after the suffix are ignored, so
/// `"4.7kohm"` parses the same as `"4.7k"`.
pub fn parse_resistance(s: &str) -> Option<f64> {
    let s = s.trim();

    // Try to parse as a plain number first
    if let Ok(v) = s.parse::<f64>() {
        return Some(v);
    }

    // Find where the numeric part ends
    let num_end = s
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .unwrap_or(s.len());

    if num_end == 0 {
        return None;
    }

    let (num_str, rest) = s.split_at(num_end);
    let value: f64 = num_str.parse().ok()?;

    let multiplier = match rest.trim_start().chars().next() {
        Some('k') => 1e3,
        Some('M') => 1e6,
        _ => 1.0,
    };

    Some(value * multiplier)
}

/// Pretty-print a resistance value with Ω/kΩ/MΩ scaling.
pub fn format_resistance(value: f64) -> String {
    if value > 1e6 {
        format!("{:6.2} MΩ", value * 1e-6)
    } else if value > 1e3 {
        format!("{:6.2} kΩ", value * 1e-3)
    } else {
        format!("{:6.2} Ω", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_number() {
        assert_eq!(parse_resistance("100"), Some(100.0));
        assert_eq!(parse_resistance("1.5"), Some(1.5));
        assert_eq!(parse_resistance("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_with_suffix() {
        assert_eq!(parse_resistance("4.7k"), Some(4700.0));
        assert_eq!(parse_resistance("2.2M"), Some(2.2e6));
        assert_eq!(parse_resistance("10k"), Some(10_000.0));
    }

    #[test]
    fn test_parse_whitespace_before_suffix() {
        assert_eq!(parse_resistance("4.7 k"), Some(4700.0));
        assert_eq!(parse_resistance("  1 M "), Some(1e6));
    }

    #[test]
    fn test_parse_trailing_text_after_suffix() {
        assert_eq!(parse_resistance("4.7kohm"), Some(4700.0));
    }

    #[test]
    fn test_parse_unknown_suffix_ignored() {
        // Unrecognized suffixes leave the value in ohms
        assert_eq!(parse_resistance("100R"), Some(100.0));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_resistance(""), None);
        assert_eq!(parse_resistance("\n"), None);
        assert_eq!(parse_resistance("abc"), None);
        assert_eq!(parse_resistance("k"), None);
    }

    #[test]
    fn test_format_resistance() {
        assert_eq!(format_resistance(100.0), "100.00 Ω");
        assert_eq!(format_resistance(4700.0), "  4.70 kΩ");
        assert_eq!(format_resistance(2.2e6), "  2.20 MΩ");
        // Scaling thresholds are strict, so exactly 1k stays in ohms
        assert_eq!(format_resistance(1000.0), "1000.00 Ω");
    }
}
