//! Formatting utilities for terminal output

use crate::core::Verdict;

/// Format a verdict row as an emoji string
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts
        .iter()
        .map(|verdict| match verdict {
            Verdict::Absent => '⬜',
            Verdict::Close => '🟨',
            Verdict::Correct => '🟩',
        })
        .collect()
}

/// Format points with an explicit sign
#[must_use]
pub fn signed_points(points: i64) -> String {
    if points >= 0 {
        format!("+{points}")
    } else {
        points.to_string()
    }
}
