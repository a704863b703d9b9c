use serde::Serialize;

/// Summary value type
///
/// A leadership summary is always exactly three sentences: strength,
/// weakness, and overall profile, in that order.
///
/// # Invariants
/// - Exactly 3 sentences
/// - No sentence is empty or whitespace-only
///
/// # Example
/// ```
/// use leadsum_api::domain::summary::Summary;
///
/// let summary = Summary::from_lines(vec![
///     "뛰어난 소통 및 전략 역량을 보유함.".to_string(),
///     "다만 위임 역량은 일부 보완이 필요함.".to_string(),
///     "종합적으로 소통 기반의 소통형 리더임.".to_string(),
/// ]).expect("valid summary");
///
/// assert_eq!(summary.lines().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    lines: [String; 3],
}

impl Summary {
    /// Builds a summary from exactly three non-empty lines
    ///
    /// # Returns
    /// * `Ok(Summary)` - If the lines satisfy the invariants
    /// * `Err(String)` - If the count is not 3 or a line is blank
    pub fn from_lines(lines: Vec<String>) -> Result<Self, String> {
        let count = lines.len();
        let lines: [String; 3] = lines
            .try_into()
            .map_err(|_| format!("Summary must contain exactly 3 sentences, got {}", count))?;

        if lines.iter().any(|line| line.trim().is_empty()) {
            return Err("Summary sentences cannot be empty".to_string());
        }

        Ok(Self { lines })
    }

    /// Builds a summary from pre-rendered template sentences
    ///
    /// Only used by the keyword summarizer, whose templates can never
    /// produce an empty sentence.
    pub(crate) fn from_sentences(lines: [String; 3]) -> Self {
        Self { lines }
    }

    /// Returns the strength sentence
    pub fn strength_line(&self) -> &str {
        &self.lines[0]
    }

    /// Returns the weakness sentence
    pub fn weakness_line(&self) -> &str {
        &self.lines[1]
    }

    /// Returns the overall profile sentence
    pub fn profile_line(&self) -> &str {
        &self.lines[2]
    }

    /// Returns all three sentences in order
    pub fn lines(&self) -> &[String; 3] {
        &self.lines
    }
}
