//! Byte-offset text splicing
//!
//! Rewrites are produced by editing the original text at node offsets
//! rather than re-printing the tree. Edits inside one span are applied in
//! strictly decreasing start order so that every pending edit still sees
//! valid offsets.
//!
//! Two edit forms exist:
//!
//! - [`TextEdit`]: replace a range with fixed text (removal, fillers)
//! - [`Transplant`]: replace a range with the rendered text of another
//!   range (swaps and reorderings). Transplants nest: an origin that
//!   contains other transplant targets is rendered with those applied.

use std::ops::Range;

/// Replace `range` with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn new(range: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Delete `range`
    pub fn delete(range: Range<usize>) -> Self {
        Self::new(range, String::new())
    }
}

/// Replace `target` with the rendered text found at `origin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transplant {
    pub target: Range<usize>,
    pub origin: Range<usize>,
}

impl Transplant {
    /// The two transplants that exchange `a` and `b`
    pub fn swap(a: Range<usize>, b: Range<usize>) -> [Self; 2] {
        [
            Self {
                target: a.clone(),
                origin: b.clone(),
            },
            Self {
                target: b,
                origin: a,
            },
        ]
    }
}

/// Apply `edits` (absolute offsets into `text`) to the `bounds` slice
///
/// Returns `None` if an edit falls outside `bounds`, two edits overlap, or
/// an offset is not a character boundary.
pub fn apply_edits(text: &str, bounds: Range<usize>, mut edits: Vec<TextEdit>) -> Option<String> {
    let mut out = text.get(bounds.clone())?.to_string();
    edits.sort_by(|a, b| b.range.start.cmp(&a.range.start));

    let mut floor = bounds.end;
    for edit in edits {
        let Range { start, end } = edit.range;
        if start < bounds.start || end > floor || start > end {
            return None;
        }
        let local = (start - bounds.start)..(end - bounds.start);
        if !out.is_char_boundary(local.start) || !out.is_char_boundary(local.end) {
            return None;
        }
        out.replace_range(local, &edit.replacement);
        floor = start;
    }
    Some(out)
}

/// Render the `bounds` slice of `text` with every transplant inside it applied
pub fn render_transplants(
    text: &str,
    bounds: Range<usize>,
    transplants: &[Transplant],
) -> Option<String> {
    let inside: Vec<&Transplant> = transplants
        .iter()
        .filter(|t| contains(&bounds, &t.target) && t.target != bounds)
        .collect();

    let mut edits = Vec::new();
    for transplant in &inside {
        let nested = inside
            .iter()
            .any(|other| other.target != transplant.target && contains(&other.target, &transplant.target));
        if nested {
            continue;
        }
        let replacement = render_transplants(text, transplant.origin.clone(), transplants)?;
        edits.push(TextEdit::new(transplant.target.clone(), replacement));
    }
    apply_edits(text, bounds, edits)
}

fn contains(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}
