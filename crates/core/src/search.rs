//! Note search: the matcher the palette asks for results on every keystroke.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Serialize;
use tracing::debug;

use crate::config::PaletteConfig;
use crate::highlight::{self, MatchRange, Segment};
use crate::notes::{Field, Note};
use crate::query::{self, Query, Term, TermKind};

/// A matched range tagged with the field it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldMatch {
    pub field: Field,
    #[serde(flatten)]
    pub range: MatchRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Position of the note in the store.
    pub index: usize,
    pub note: Note,
    /// Relevance in `[0, 1]`, higher is better.
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

impl SearchHit {
    pub fn ranges(&self, field: Field) -> Vec<MatchRange> {
        self.matches
            .iter()
            .filter(|m| m.field == field)
            .map(|m| m.range)
            .collect()
    }

    pub fn segments(&self, field: Field) -> Vec<Segment<'static>> {
        highlight::highlight(self.note.field(field), &self.ranges(field))
    }
}

/// Anything that can turn a search term into ranked hits.
pub trait NoteMatcher {
    fn search(&self, term: &str) -> Vec<SearchHit>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub threshold: f64,
    pub min_match_char_length: usize,
    pub max_pattern_length: usize,
    pub max_results: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}

impl From<&PaletteConfig> for SearchOptions {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            threshold: config.threshold,
            min_match_char_length: config.min_match_char_length,
            max_pattern_length: config.max_pattern_length,
            max_results: config.max_results,
        }
    }
}

/// Searches a fixed note list with the extended query syntax; fuzzy terms
/// are scored with the Skim algorithm.
pub struct FuzzySearcher {
    notes: &'static [Note],
    options: SearchOptions,
    matcher: SkimMatcherV2,
}

/// Outcome of evaluating one query against one field.
struct FieldOutcome {
    score: f64,
    ranges: Vec<MatchRange>,
}

impl FuzzySearcher {
    pub fn new(notes: &'static [Note], options: SearchOptions) -> Self {
        Self {
            notes,
            options,
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    fn evaluate_field(&self, query: &Query, text: &str) -> Option<FieldOutcome> {
        let folded = query::fold(text);

        query
            .groups
            .iter()
            .filter_map(|group| {
                let mut total = 0.0;
                let mut ranges = Vec::new();
                for term in group {
                    let (score, term_ranges) = self.evaluate_term(term, text, &folded)?;
                    total += score;
                    ranges.extend(term_ranges);
                }
                Some(FieldOutcome { score: total / group.len() as f64, ranges })
            })
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|mut outcome| {
                outcome
                    .ranges
                    .retain(|r| r.len() >= self.options.min_match_char_length);
                outcome.ranges = highlight::merge_ranges(outcome.ranges);
                outcome
            })
    }

    fn evaluate_term(
        &self,
        term: &Term,
        text: &str,
        folded: &[char],
    ) -> Option<(f64, Vec<MatchRange>)> {
        let needle = term.chars();
        let whole = || MatchRange::new(0, folded.len().saturating_sub(1));

        match term.kind {
            TermKind::Fuzzy => self.fuzzy_term(&term.text, text),
            TermKind::Exact => (folded == needle.as_slice()).then(|| (1.0, vec![whole()])),
            TermKind::Include => {
                let found = find_all(folded, &needle);
                (!found.is_empty()).then_some((1.0, found))
            }
            TermKind::Prefix => folded
                .starts_with(&needle)
                .then(|| (1.0, vec![MatchRange::new(0, needle.len().saturating_sub(1))])),
            TermKind::Suffix => folded.ends_with(&needle).then(|| {
                let start = folded.len() - needle.len();
                (1.0, vec![MatchRange::new(start, folded.len().saturating_sub(1))])
            }),
            TermKind::InverseInclude => find_all(folded, &needle)
                .is_empty()
                .then(|| (1.0, Vec::new())),
            TermKind::InversePrefix => (!folded.starts_with(&needle)).then(|| (1.0, Vec::new())),
            TermKind::InverseSuffix => (!folded.ends_with(&needle)).then(|| (1.0, Vec::new())),
        }
    }

    /// Scores relative to the pattern matched against itself, so the result
    /// is comparable across pattern lengths.
    fn fuzzy_term(&self, pattern: &str, text: &str) -> Option<(f64, Vec<MatchRange>)> {
        let (score, indices) = self.matcher.fuzzy_indices(text, pattern)?;
        let perfect = self.matcher.fuzzy_match(pattern, pattern).unwrap_or(score).max(1);
        let quality = (score as f64 / perfect as f64).clamp(0.0, 1.0);

        if quality < 1.0 - self.options.threshold {
            return None;
        }
        Some((quality, highlight::ranges_from_indices(&indices, 1)))
    }
}

/// Every non-overlapping occurrence of `needle` in `haystack`.
fn find_all(haystack: &[char], needle: &[char]) -> Vec<MatchRange> {
    let mut found = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return found;
    }

    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] == *needle {
            found.push(MatchRange::new(i, i + needle.len() - 1));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    found
}

impl NoteMatcher for FuzzySearcher {
    fn search(&self, term: &str) -> Vec<SearchHit> {
        let query = Query::parse(term, self.options.max_pattern_length);
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .notes
            .iter()
            .enumerate()
            .filter_map(|(index, note)| {
                let mut best: Option<f64> = None;
                let mut matches = Vec::new();

                for field in Field::ALL {
                    if let Some(outcome) = self.evaluate_field(&query, note.field(field)) {
                        best = Some(best.map_or(outcome.score, |b| b.max(outcome.score)));
                        matches.extend(
                            outcome.ranges.into_iter().map(|range| FieldMatch { field, range }),
                        );
                    }
                }

                best.map(|score| SearchHit { index, note: *note, score, matches })
            })
            .collect();

        // Stable, so equal scores keep store order.
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Some(max) = self.options.max_results {
            hits.truncate(max);
        }

        debug!(term, hits = hits.len(), "search complete");
        hits
    }
}
