/// Strip a message to its canonical comparable form: lowercase, with
/// everything except ASCII letters, digits, and whitespace removed.
///
/// Characters are dropped, not replaced: `"don't"` becomes `"dont"`,
/// and spacing survives only where the input already had it. Total on
/// any string input.
pub fn normalize_message(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_spacing() {
        assert_eq!(normalize_message("What IS my Blood Type"), "what is my blood type");
    }

    #[test]
    fn drops_punctuation_without_gaps() {
        assert_eq!(normalize_message("don't"), "dont");
        assert_eq!(normalize_message("What's my blood type?"), "whats my blood type");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(normalize_message("show report #3"), "show report 3");
    }

    #[test]
    fn empty_maps_to_empty() {
        assert_eq!(normalize_message(""), "");
    }

    #[test]
    fn strips_non_ascii_symbols() {
        assert_eq!(normalize_message("blood‐type →now"), "bloodtype now");
    }

    #[test]
    fn idempotent() {
        let once = normalize_message("Do I have... diabetes?!");
        assert_eq!(normalize_message(&once), once);
    }
}
