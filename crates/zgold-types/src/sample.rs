//! Named immutable input samples.

use std::sync::Arc;

/// An immutable named byte sequence used as encoder input.
///
/// Identity is the name.  Samples are loaded once at harness start and never
/// mutated; the bytes are shared cheaply between scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    name: String,
    bytes: Arc<[u8]>,
}

impl Sample {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the bytes, for use as a priming dictionary.
    #[must_use]
    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
