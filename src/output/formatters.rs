//! Formatting utilities for terminal output

use crate::core::Entry;

/// Join entries as a comma-separated list
#[must_use]
pub fn format_word_list(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the dictionary a guess is guaranteed to remove, as a bar
#[must_use]
pub fn reduction_bar(guaranteed: usize, total: usize, width: usize) -> String {
    create_progress_bar(guaranteed as f64, total as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_joins_with_commas() {
        let entries: Vec<Entry> = ["crane", "slate"]
            .iter()
            .map(|w| Entry::new(w).unwrap())
            .collect();
        assert_eq!(format_word_list(&entries), "CRANE, SLATE");
        assert_eq!(format_word_list(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn reduction_bar_handles_empty_dictionary() {
        assert_eq!(reduction_bar(0, 0, 4), "░░░░");
        assert_eq!(reduction_bar(3, 4, 4), "███░");
    }
}
