/// Idempotency marker: a literal only ever introduced by one rule's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel(pub &'static str);

impl Sentinel {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether the owning rule has already been applied to `text`.
    pub fn already_applied(&self, text: &str) -> bool {
        already_applied(text, self.0)
    }
}

/// Exact substring containment.
pub fn already_applied(text: &str, sentinel: &str) -> bool {
    text.contains(sentinel)
}
