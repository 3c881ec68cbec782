//! Match-range to highlight-segment conversion.
//!
//! All indices are character (Unicode scalar) positions, not byte offsets,
//! and both ends of a [`MatchRange`] are inclusive.

use serde::Serialize;

/// An inclusive character range reported as matching.
///
/// Indices are unsigned, so a negative start cannot be expressed here;
/// callers converting from signed positions must reject those first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered. Inverted ranges cover nothing.
    pub fn len(&self) -> usize {
        if self.end < self.start { 0 } else { self.end - self.start + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Highlighted,
}

/// A contiguous slice of the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, kind: SegmentKind::Plain }
    }

    pub fn highlighted(text: &'a str) -> Self {
        Self { text, kind: SegmentKind::Highlighted }
    }

    pub fn is_highlighted(&self) -> bool {
        self.kind == SegmentKind::Highlighted
    }
}

/// Splits `text` into plain and highlighted segments.
///
/// Ranges are expected in ascending order and non-overlapping. Anything else
/// is clamped rather than rejected:
/// - an `end` past the last character is clamped to it,
/// - a range starting at or past the end of the text is dropped,
/// - an inverted range (`end < start`) is dropped,
/// - a range starting before the previous one ended is trimmed to start
///   after it, and dropped if nothing is left.
///
/// Concatenating the returned segments always yields `text`. Empty text
/// yields no segments at all.
pub fn highlight<'a>(text: &'a str, ranges: &[MatchRange]) -> Vec<Segment<'a>> {
    // Byte offset of every char boundary, including the end of the string.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = offsets.len() - 1;

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;

    for range in ranges {
        if range.end < range.start || range.start >= char_len {
            continue;
        }
        let start = range.start.max(cursor);
        let end = range.end.min(char_len - 1);
        if start > end {
            continue;
        }

        if start > cursor {
            segments.push(Segment::plain(&text[offsets[cursor]..offsets[start]]));
        }
        segments.push(Segment::highlighted(&text[offsets[start]..offsets[end + 1]]));
        cursor = end + 1;
    }

    if cursor < char_len {
        segments.push(Segment::plain(&text[offsets[cursor]..]));
    }

    segments
}

/// Collapses per-character match positions into maximal contiguous ranges.
///
/// Runs shorter than `min_len` characters are dropped.
pub fn ranges_from_indices(indices: &[usize], min_len: usize) -> Vec<MatchRange> {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let mut ranges = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return ranges;
    };

    let mut current = MatchRange::new(first, first);
    for idx in iter {
        if idx == current.end + 1 {
            current.end = idx;
        } else {
            ranges.push(current);
            current = MatchRange::new(idx, idx);
        }
    }
    ranges.push(current);

    ranges.retain(|r| r.len() >= min_len);
    ranges
}

/// Sorts ranges by start and coalesces the overlapping ones.
/// Touching ranges are kept apart.
pub fn merge_ranges(mut ranges: Vec<MatchRange>) -> Vec<MatchRange> {
    ranges.retain(|r| !r.is_empty());
    ranges.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Renders segments as text, wrapping highlighted runs in `[[` and `]]`.
pub fn render_marked(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.is_highlighted() {
            out.push_str("[[");
            out.push_str(segment.text);
            out.push_str("]]");
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    fn r(start: usize, end: usize) -> MatchRange {
        MatchRange::new(start, end)
    }

    #[test]
    fn no_ranges_is_one_plain_segment() {
        let segments = highlight("hello world", &[]);
        assert_eq!(segments, vec![Segment::plain("hello world")]);
        assert!(!segments.iter().any(Segment::is_highlighted));
    }

    #[test]
    fn empty_text_yields_no_segments() {
        assert!(highlight("", &[]).is_empty());
        assert!(highlight("", &[r(0, 3)]).is_empty());
    }

    #[test]
    fn touching_ranges_have_no_empty_gap() {
        let segments = highlight("abcdef", &[r(0, 1), r(2, 3)]);
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("ab"),
                Segment::highlighted("cd"),
                Segment::plain("ef"),
            ]
        );
    }

    #[test]
    fn full_text_match() {
        assert_eq!(highlight("hello", &[r(0, 4)]), vec![Segment::highlighted("hello")]);
    }

    #[test]
    fn trailing_match() {
        assert_eq!(
            highlight("hello", &[r(3, 4)]),
            vec![Segment::plain("hel"), Segment::highlighted("lo")]
        );
    }

    #[test]
    fn leading_and_middle_matches() {
        let segments = highlight("grocery list", &[r(0, 1), r(8, 9)]);
        assert_eq!(
            segments,
            vec![
                Segment::highlighted("gr"),
                Segment::plain("ocery "),
                Segment::highlighted("li"),
                Segment::plain("st"),
            ]
        );
    }

    #[test]
    fn end_past_text_is_clamped() {
        let segments = highlight("hello", &[r(2, 40)]);
        assert_eq!(segments, vec![Segment::plain("he"), Segment::highlighted("llo")]);
    }

    #[test]
    fn start_past_text_is_dropped() {
        let segments = highlight("hello", &[r(1, 1), r(5, 9)]);
        assert_eq!(
            segments,
            vec![Segment::plain("h"), Segment::highlighted("e"), Segment::plain("llo")]
        );
    }

    #[test]
    fn inverted_and_overlapping_ranges_are_trimmed() {
        let text = "abcdefgh";
        let segments = highlight(text, &[r(1, 3), r(2, 5), r(6, 4), r(0, 1)]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("a"),
                Segment::highlighted("bcd"),
                Segment::highlighted("ef"),
                Segment::plain("gh"),
            ]
        );
        assert_eq!(concat(&segments), text);
    }

    #[test]
    fn slices_on_char_boundaries() {
        let text = "crème brûlée";
        let segments = highlight(text, &[r(2, 2), r(8, 9)]);
        assert_eq!(
            segments,
            vec![
                Segment::plain("cr"),
                Segment::highlighted("è"),
                Segment::plain("me br"),
                Segment::highlighted("ûl"),
                Segment::plain("ée"),
            ]
        );
    }

    #[test]
    fn round_trip_holds_for_many_range_sets() {
        let text = "Eggs, Milk, Bread, Butter, Cheese";
        let sets: Vec<Vec<MatchRange>> = vec![
            vec![],
            vec![r(0, 0)],
            vec![r(0, 32)],
            vec![r(6, 9), r(12, 16)],
            vec![r(3, 4), r(5, 6), r(7, 7)],
            vec![r(30, 100)],
            vec![r(10, 2), r(40, 50)],
            vec![r(20, 25), r(1, 22)],
        ];
        for ranges in sets {
            assert_eq!(concat(&highlight(text, &ranges)), text, "ranges: {:?}", ranges);
        }
    }

    #[test]
    fn indices_collapse_into_runs() {
        let ranges = ranges_from_indices(&[9, 0, 1, 2, 5, 6, 9, 12], 1);
        assert_eq!(ranges, vec![r(0, 2), r(5, 6), r(9, 9), r(12, 12)]);
    }

    #[test]
    fn short_runs_are_dropped() {
        let ranges = ranges_from_indices(&[0, 1, 2, 5, 9, 10], 2);
        assert_eq!(ranges, vec![r(0, 2), r(9, 10)]);
        assert!(ranges_from_indices(&[], 2).is_empty());
    }

    #[test]
    fn overlapping_ranges_merge() {
        let merged = merge_ranges(vec![r(8, 10), r(0, 3), r(2, 5), r(6, 7), r(4, 1)]);
        assert_eq!(merged, vec![r(0, 5), r(6, 7), r(8, 10)]);
    }

    #[test]
    fn marked_rendering() {
        let segments = highlight("Butter Chicken", &[r(7, 13)]);
        assert_eq!(render_marked(&segments), "Butter [[Chicken]]");
    }
}
