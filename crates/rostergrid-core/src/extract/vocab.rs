/// A case-insensitive term list.
///
/// Terms are trimmed and lowercased once at construction; blank terms and
/// duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from raw terms.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut folded: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !folded.contains(&term) {
                folded.push(term);
            }
        }
        Self { terms: folded }
    }

    /// The folded terms.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns `true` if the trimmed value equals a term, ignoring case.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        let value = value.trim().to_lowercase();
        self.terms.iter().any(|t| *t == value)
    }

    /// Returns `true` if any term occurs inside `text`, ignoring case.
    #[must_use]
    pub fn found_in(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.terms.iter().any(|t| text.contains(t.as_str()))
    }
}
