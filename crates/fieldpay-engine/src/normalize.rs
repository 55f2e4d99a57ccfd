//! Total cell normalizers. Every function here accepts arbitrary input and
//! never fails; malformed values degrade to zero or the empty string.

/// Parse an integer VND amount from a free-text cell.
///
/// Blank cells and a bare `-` mean "no amount" and read as 0. Everything
/// else is stripped to ASCII digits and minus signs and parsed as a whole
/// number; values that still do not parse read as 0.
pub fn parse_money_vnd(raw: &str) -> i64 {
    parse_money_checked(raw).unwrap_or(0)
}

/// Like [`parse_money_vnd`] but distinguishes well-formed cells from ones
/// that only degrade to 0. Blank and `-` cells are well-formed zeros;
/// `None` means the cell held something the digit filter could not save.
pub fn parse_money_checked(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Some(0);
    }
    let filtered: String = trimmed
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect();
    if filtered.is_empty() || filtered == "-" {
        return None;
    }
    filtered.parse::<i64>().ok()
}

/// Keep only ASCII digits. `"+84 912-345 678"` becomes `"84912345678"`.
pub fn normalize_phone(raw: &str) -> String {
    raw.trim().chars().filter(char::is_ascii_digit).collect()
}

/// Trim and lower-case a status cell for comparison.
pub fn normalize_status(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_dash_are_zero_amounts() {
        assert_eq!(parse_money_vnd(""), 0);
        assert_eq!(parse_money_vnd("   "), 0);
        assert_eq!(parse_money_vnd(" - "), 0);
        assert_eq!(parse_money_checked(" - "), Some(0));
    }

    #[test]
    fn currency_decoration_is_stripped() {
        assert_eq!(parse_money_vnd("50,000"), 50000);
        assert_eq!(parse_money_vnd("50.000 VND"), 50000);
        assert_eq!(parse_money_vnd("đ75 000"), 75000);
        assert_eq!(parse_money_vnd("-20000"), -20000);
    }

    #[test]
    fn unparseable_amounts_degrade_to_zero() {
        assert_eq!(parse_money_vnd("abc"), 0);
        assert_eq!(parse_money_checked("abc"), None);
        // a stray inner minus breaks the whole-string parse
        assert_eq!(parse_money_vnd("1-2"), 0);
        assert_eq!(parse_money_checked("1-2"), None);
        assert_eq!(parse_money_checked("0"), Some(0));
    }

    #[test]
    fn phones_keep_digits_only() {
        assert_eq!(normalize_phone("+84 912-345-678"), "84912345678");
        assert_eq!(normalize_phone("(0912) 345 678"), "0912345678");
        assert_eq!(normalize_phone("n/a"), "");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn status_folds_case_and_whitespace() {
        assert_eq!(normalize_status("  Complete "), "complete");
        assert_eq!(normalize_status("DISQUALIFIED"), "disqualified");
        assert_eq!(normalize_status(""), "");
    }
}
