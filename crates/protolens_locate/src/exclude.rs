//! Range exclusion: the searchable complement of comment spans on a line.

use crate::{Line, LocateError, Span};

/// Remove `excluded` spans from `line`, returning what is left in
/// left-to-right order.
///
/// The exclusions may arrive in any order but must lie inside the line
/// (`RangeBeyondLine`) and must not overlap (`RangeIntersection`).
/// Zero-width gaps, such as between two touching exclusions, are dropped.
///
/// ```
/// use protolens_locate::{exclude_line_ranges, Line, Span};
///
/// let line = Line::new(0, "int32 a = 1; // note");
/// let kept = exclude_line_ranges(&line, &[Span::new(13, 20)]).unwrap();
/// assert_eq!(kept, vec![Span::new(0, 13)]);
/// ```
pub fn exclude_line_ranges(line: &Line<'_>, excluded: &[Span]) -> Result<Vec<Span>, LocateError> {
    let full = line.range();
    if excluded.is_empty() {
        return Ok(vec![full]);
    }

    if let Some(&span) = excluded.iter().find(|span| !full.contains_span(**span)) {
        return Err(LocateError::RangeBeyondLine {
            line: line.number(),
            span,
            len: line.len(),
        });
    }

    let mut sorted = excluded.to_vec();
    sorted.sort_unstable();

    // [line start, r1.start, r1.end, ..., rN.start, rN.end, line end]
    let mut bounds = Vec::with_capacity(sorted.len() * 2 + 2);
    bounds.push(full.start);
    for span in &sorted {
        bounds.push(span.start);
        bounds.push(span.end);
    }
    bounds.push(full.end);

    let mut kept = Vec::with_capacity(sorted.len() + 1);
    for pair in bounds.chunks_exact(2) {
        let (start, end) = (pair[0], pair[1]);
        if start > end {
            return Err(LocateError::RangeIntersection {
                line: line.number(),
            });
        }
        if start != end {
            kept.push(Span::new(start, end));
        }
    }
    Ok(kept)
}
