//! Console formatting helpers for the variations table.

use colored::Colorize;

/// Width every movetext cell is padded to.
pub const MOVETEXT_WIDTH: usize = 11;

/// Placeholder for a move shown on another row.
pub const MOVE_ELLIPSIS: &str = "... ";

/// Prefix for Black alternatives, which appear on a row numbered for White.
pub const BLACK_MOVE_PREFIX: &str = "…";

const OUT_OF_RANGE_LABEL: &str = "∞";

/// Whether output is colorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Default for Style {
    fn default() -> Self {
        Style { color: true }
    }
}

impl Style {
    pub fn plain() -> Self {
        Style { color: false }
    }

    /// Pad movetext to the cell width and tint it by its canonical edge index.
    ///
    /// `None` marks a placeholder, which is never tinted; the canonical main
    /// line (index 0) is left plain.
    pub fn movetext(&self, text: &str, original_index: Option<usize>) -> String {
        let padded = format!("{text:<MOVETEXT_WIDTH$}");
        if !self.color {
            return padded;
        }
        match original_index {
            None | Some(0) => padded,
            Some(1) => padded.bright_red().to_string(),
            Some(2) => padded.green().to_string(),
            Some(3) => padded.yellow().to_string(),
            Some(4) => padded.magenta().to_string(),
            Some(5) => padded.cyan().to_string(),
            Some(_) => padded.bright_blue().to_string(),
        }
    }

    pub fn label(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.magenta().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        if self.color {
            text.bright_red().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Label for the `n`th alternative, 1-based: `a`..`z`, then `∞`.
pub fn alpha_label(n: usize) -> String {
    match n {
        1..=26 => char::from(b'a' + (n - 1) as u8).to_string(),
        _ => OUT_OF_RANGE_LABEL.to_string(),
    }
}

/// Inverse of [`alpha_label`] for a single ASCII letter, either case.
pub fn alpha_number(letter: char) -> Option<usize> {
    letter
        .is_ascii_alphabetic()
        .then(|| usize::from(letter.to_ascii_lowercase() as u8 - b'a') + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_letters() {
        assert_eq!(alpha_label(1), "a");
        assert_eq!(alpha_label(26), "z");
        assert_eq!(alpha_label(27), "∞");
        assert_eq!(alpha_number('a'), Some(1));
        assert_eq!(alpha_number('C'), Some(3));
        assert_eq!(alpha_number('7'), None);
    }

    #[test]
    fn plain_movetext_is_padded() {
        assert_eq!(Style::plain().movetext("e4", Some(2)), "e4         ");
        assert_eq!(Style::plain().movetext("…Nf6", Some(1)).chars().count(), MOVETEXT_WIDTH);
    }
}
