//! Custom filters for the comparison page

use enegrem_core::LetterStatus;
use minijinja::Value;

/// Counts above this are shown as `99+`
pub const COUNT_DISPLAY_LIMIT: i64 = 100;

/// Placeholder for a source letter the candidate already used
pub const CONSUMED_CELL: &str = "_";

/// Display label for a letter difference
///
/// Values above [`COUNT_DISPLAY_LIMIT`] collapse to `99+`; a difference of
/// exactly 100 is still printed in full.
pub fn count_label(count: i64) -> String {
    if count > COUNT_DISPLAY_LIMIT {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

/// CSS class for a letter difference
pub fn letter_status(count: i64) -> String {
    LetterStatus::from_diff(count).as_str().to_string()
}

/// Render one cell of the remaining-letters strip
pub fn letter_cell(cell: Value) -> String {
    if cell.is_none() || cell.is_undefined() {
        CONSUMED_CELL.to_string()
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0");
        assert_eq!(count_label(-3), "-3");
        assert_eq!(count_label(100), "100");
        assert_eq!(count_label(101), "99+");
    }

    #[test]
    fn test_letter_status() {
        assert_eq!(letter_status(0), "balanced");
        assert_eq!(letter_status(2), "missing");
        assert_eq!(letter_status(-1), "overused");
    }

    #[test]
    fn test_letter_cell() {
        assert_eq!(letter_cell(Value::from(())), "_");
        assert_eq!(letter_cell(Value::from("L")), "L");
    }
}
