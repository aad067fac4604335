//! Literal anchor location.
//!
//! Anchors are exact, case-sensitive substrings. No normalisation, no regex:
//! the first occurrence wins.

/// A named insertion anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// A single literal substring
    Literal(&'static str),
    /// Candidate literals tried in order; the first one present wins
    FirstOf(&'static [&'static str]),
}

impl Anchor {
    /// Byte offset of the anchor's first occurrence in `text`.
    ///
    /// For [`Anchor::FirstOf`] the candidate order decides, not the position in
    /// the text: a later candidate is only consulted when every earlier one is
    /// absent.
    pub fn locate(&self, text: &str) -> Option<usize> {
        match self {
            Anchor::Literal(needle) => text.find(needle),
            Anchor::FirstOf(candidates) => candidates.iter().find_map(|c| text.find(c)),
        }
    }

    /// The literal that resolved, if any.
    pub fn matched(&self, text: &str) -> Option<&'static str> {
        match self {
            Anchor::Literal(needle) => text.contains(needle).then_some(*needle),
            Anchor::FirstOf(candidates) => candidates.iter().copied().find(|c| text.contains(c)),
        }
    }
}

/// Next occurrence of `needle` strictly after `base`.
pub fn locate_after(text: &str, base: usize, needle: &str) -> Option<usize> {
    let rest = text.get(base..)?;
    let skip = rest.chars().next().map_or(0, char::len_utf8);
    let start = base + skip;
    text.get(start..)?.find(needle).map(|idx| start + idx)
}

/// Offset just past the newline terminating the line that contains `offset`.
///
/// Returns `None` when that line has no terminating newline.
pub fn line_end(text: &str, offset: usize) -> Option<usize> {
    text.get(offset..)?
        .find('\n')
        .map(|idx| offset + idx + 1)
}
