//! Regex search over a window of one line.

use regex::Regex;

use crate::{Line, MatchRange, Span};

/// Find up to `limit` matches of `pattern` on `line` (0 means no limit).
///
/// The window searched is `[max(seek.start, last_index), seek.end)`.
/// Matching is unanchored and resumes after each match, so results are
/// non-overlapping and ordered left to right. The window is searched as
/// its own haystack: `^`, `$` and `\b` see its edges as text boundaries.
pub fn find_matches<'a>(
    line: &Line<'a>,
    seek: Span,
    pattern: &Regex,
    last_index: usize,
    limit: usize,
) -> Vec<MatchRange<'a>> {
    let end = seek.end.min(line.len());
    let start = seek.start.max(last_index);
    if start >= end {
        return Vec::new();
    }
    let Some(haystack) = line.text().get(start..end) else {
        return Vec::new();
    };

    let found = pattern
        .find_iter(haystack)
        .filter(|m| !m.is_empty())
        .map(|m| MatchRange::on_line(line, Span::new(start + m.start(), start + m.end())));

    if limit == 0 {
        found.collect()
    } else {
        found.take(limit).collect()
    }
}

/// Search each of `ranges` in order, collecting up to `limit` matches
/// overall (0 means no limit).
///
/// Used when a line is split around comments: a token sequence may
/// continue in the next searchable range.
pub fn find_in_ranges<'a>(
    line: &Line<'a>,
    ranges: &[Span],
    pattern: &Regex,
    last_index: usize,
    limit: usize,
) -> Vec<MatchRange<'a>> {
    let mut found = Vec::new();
    for &range in ranges {
        let remaining = if limit == 0 { 0 } else { limit - found.len() };
        found.extend(find_matches(line, range, pattern, last_index, remaining));
        if limit != 0 && found.len() >= limit {
            break;
        }
    }
    found
}

#[cfg(test)]
mod tests;
