use super::errors::{GenerationError, GenerationResult};
use crate::domain::summary::Summary;

/// Validates a raw model completion into a summary
///
/// The completion is split on line breaks, trimmed, and stripped of blank
/// lines; anything other than exactly 3 remaining lines is rejected with the
/// observed line count rather than passed through to the caller.
pub fn parse_summary(completion: &str) -> GenerationResult<Summary> {
    let lines: Vec<String> = completion
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.len() != 3 {
        return Err(GenerationError::MalformedResponse {
            line_count: lines.len(),
        });
    }

    Summary::from_lines(lines).map_err(|_| GenerationError::MalformedResponse { line_count: 3 })
}
