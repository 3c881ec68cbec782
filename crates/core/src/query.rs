//! Extended search syntax.
//!
//! Whitespace separates terms that must all match (AND); a standalone `|`
//! separates alternatives (OR). Each term may carry an operator:
//!
//! | Token       | Matches fields that…          |
//! |-------------|-------------------------------|
//! | `word`      | fuzzy-match `word`            |
//! | `=word`     | equal `word`                  |
//! | `'word`     | contain `word`                |
//! | `!word`     | do not contain `word`         |
//! | `^word`     | start with `word`             |
//! | `!^word`    | do not start with `word`      |
//! | `word$`     | end with `word`               |
//! | `!word$`    | do not end with `word`        |
//!
//! Matching is case-insensitive, so term text is stored lowercased.

/// Lowercases one char at a time so positions line up with the source text.
pub fn fold(text: &str) -> Vec<char> {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Fuzzy,
    Exact,
    Include,
    Prefix,
    Suffix,
    InverseInclude,
    InversePrefix,
    InverseSuffix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub kind: TermKind,
    pub text: String,
}

impl Term {
    fn new(kind: TermKind, text: &str) -> Self {
        Self { kind, text: fold(text).into_iter().collect() }
    }

    pub fn chars(&self) -> Vec<char> {
        self.text.chars().collect()
    }

    /// Parses a single whitespace-free token.
    pub fn parse(token: &str, max_pattern_length: usize) -> Self {
        let (kind, text) = if let Some(rest) = token.strip_prefix("!^") {
            (TermKind::InversePrefix, rest)
        } else if let Some(rest) = token.strip_prefix('!') {
            match rest.strip_suffix('$') {
                Some(inner) => (TermKind::InverseSuffix, inner),
                None => (TermKind::InverseInclude, rest),
            }
        } else if let Some(rest) = token.strip_prefix('=') {
            (TermKind::Exact, rest)
        } else if let Some(rest) = token.strip_prefix('\'') {
            (TermKind::Include, rest)
        } else if let Some(rest) = token.strip_prefix('^') {
            (TermKind::Prefix, rest)
        } else if let Some(rest) = token.strip_suffix('$') {
            (TermKind::Suffix, rest)
        } else {
            (TermKind::Fuzzy, token)
        };

        // A bare operator such as "!" or "$" is searched for literally.
        if text.is_empty() {
            return Self::fuzzy(token, max_pattern_length);
        }
        if kind == TermKind::Fuzzy {
            return Self::fuzzy(text, max_pattern_length);
        }
        Self::new(kind, text)
    }

    fn fuzzy(text: &str, max_pattern_length: usize) -> Self {
        let truncated: String = text.chars().take(max_pattern_length).collect();
        Self::new(TermKind::Fuzzy, &truncated)
    }
}

/// A parsed query: a list of alternatives, each a list of terms that must
/// all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub groups: Vec<Vec<Term>>,
}

impl Query {
    pub fn parse(input: &str, max_pattern_length: usize) -> Self {
        let mut groups = Vec::new();
        let mut current = Vec::new();

        for token in input.split_whitespace() {
            if token == "|" {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
                continue;
            }
            current.push(Term::parse(token, max_pattern_length));
        }
        if !current.is_empty() {
            groups.push(current);
        }

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
