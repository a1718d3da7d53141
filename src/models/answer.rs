/// One accepted answer of a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
    case_sensitive: bool,
}

impl Answer {
    /// Create a case-insensitive answer.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_case(text, false)
    }

    /// Create an answer that only matches with the exact same casing.
    pub fn case_sensitive(text: impl Into<String>) -> Self {
        Self::with_case(text, true)
    }

    pub fn with_case(text: impl Into<String>, case_sensitive: bool) -> Self {
        Self {
            text: text.into(),
            case_sensitive,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Check a submitted string against this answer.
    ///
    /// Runs of whitespace are collapsed to a single space and the ends are
    /// trimmed on both sides before comparing, so `"dir  /w"` matches `"dir /w"`.
    pub fn check(&self, submitted: &str) -> bool {
        let submitted = normalize_whitespace(submitted);
        let expected = normalize_whitespace(&self.text);

        if self.case_sensitive {
            submitted == expected
        } else {
            submitted.to_lowercase() == expected.to_lowercase()
        }
    }
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
