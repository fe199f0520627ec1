//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as a glyph string: one bull per placed digit, one cow
/// per displaced digit, a dot when the guess scored nothing
#[must_use]
pub fn feedback_glyphs(feedback: Feedback) -> String {
    let bulls = feedback.bulls() as usize;
    let cows = feedback.cows() as usize;

    if bulls + cows == 0 {
        return "·".to_string();
    }

    let mut result = String::new();
    for _ in 0..bulls {
        result.push('🐂');
    }
    for _ in 0..cows {
        result.push('🐄');
    }

    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // 14 feedback classes cap a single guess at log2(14) ~ 3.81 bits
    let max_entropy = 4.0;
    create_progress_bar(entropy, max_entropy, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_glyphs_nothing_scored() {
        let feedback = Feedback::new(0, 0).unwrap();
        assert_eq!(feedback_glyphs(feedback), "·");
    }

    #[test]
    fn feedback_glyphs_bulls_then_cows() {
        let feedback = Feedback::new(2, 1).unwrap();
        assert_eq!(feedback_glyphs(feedback), "🐂🐂🐄");
    }

    #[test]
    fn feedback_glyphs_perfect() {
        assert_eq!(feedback_glyphs(Feedback::PERFECT), "🐂🐂🐂🐂");
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
    fn entropy_bar_never_overflows() {
        let bar = entropy_bar(5.0, 10);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
    }
}
