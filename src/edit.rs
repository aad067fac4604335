use thiserror::Error;

/// The fundamental edit primitive: a pure byte-offset insertion.
///
/// Every rule compiles down to exactly one of these. Intelligence lives in
/// offset acquisition (anchors, sentinels), not in application.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "Insertion does nothing until apply() is called"]
pub struct Insertion {
    /// Byte offset at which the payload is spliced in
    pub offset: usize,
    /// Text to insert at `offset`
    pub payload: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Invalid insertion offset {offset} in text of length {text_len}")]
    InvalidOffset { offset: usize, text_len: usize },

    #[error("Insertion offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },
}

impl Insertion {
    pub fn new(offset: usize, payload: impl Into<String>) -> Self {
        Self {
            offset,
            payload: payload.into(),
        }
    }

    /// Number of bytes this insertion adds.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Apply this insertion to `text`, returning the spliced copy.
    pub fn apply(&self, text: &str) -> Result<String, EditError> {
        insert(text, self.offset, &self.payload)
    }
}

/// Splice `payload` into `text` at `offset`.
///
/// Returns `text[..offset] + payload + text[offset..]`. Everything outside the
/// insertion point is preserved verbatim.
pub fn insert(text: &str, offset: usize, payload: &str) -> Result<String, EditError> {
    if offset > text.len() {
        return Err(EditError::InvalidOffset {
            offset,
            text_len: text.len(),
        });
    }
    if !text.is_char_boundary(offset) {
        return Err(EditError::NotCharBoundary { offset });
    }

    let mut spliced = String::with_capacity(text.len() + payload.len());
    spliced.push_str(&text[..offset]);
    spliced.push_str(payload);
    spliced.push_str(&text[offset..]);
    Ok(spliced)
}
