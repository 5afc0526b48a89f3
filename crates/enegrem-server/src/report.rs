//! Plain-text report of a comparison for the terminal

use enegrem_core::{Comparison, Letter};
use std::fmt::Write;

fn cells(seq: &[Option<Letter>]) -> String {
    seq.iter()
        .map(|cell| cell.map(|l| l.to_string()).unwrap_or_else(|| "_".to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a comparison as a few aligned lines
pub fn render(title: &str, comparison: &Comparison) -> String {
    let mut out = String::new();

    let counts = comparison
        .letter_count
        .iter()
        .map(|(letter, count)| format!("{}:{}", letter, count))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(out, "Letters:   {}", counts);
    let _ = writeln!(out, "Remaining: {}", cells(&comparison.source_remaining));
    let _ = writeln!(out, "Surplus:   {}", cells(&comparison.candidate_surplus));

    if comparison.is_complete {
        let _ = writeln!(out, "{} COMPLETED!", title);
    } else {
        let _ = writeln!(
            out,
            "Status:    incomplete ({} unused, {} surplus)",
            comparison.remaining().count(),
            comparison.surplus().count()
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use enegrem_core::compare;

    #[test]
    fn test_incomplete_report() {
        let report = render("ENEGREM", &compare("cat", "cats"));
        assert_eq!(
            report,
            "Letters:   A:0 C:0 T:0 S:-1\n\
             Remaining: _ _ _\n\
             Surplus:   _ _ _ S\n\
             Status:    incomplete (0 unused, 1 surplus)\n"
        );
    }

    #[test]
    fn test_complete_report() {
        let report = render("ENEGREM", &compare("Codroipo", "ocropoid"));
        assert!(report.ends_with("ENEGREM COMPLETED!\n"));
    }
}
