//! Comparison verdicts and mismatch diagnostics.
//!
//! A mismatch is not an error: it is the comparator's answer.  The report
//! carries enough detail to localize the first divergence without re-running
//! the scenario.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bytes of hex context shown on each side of the first divergence.
const CONTEXT_BYTES: usize = 16;

/// Outcome of one byte-exact comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Actual and (normalized) reference are identical in length and content.
    Pass,
    /// The sequences diverged.
    Mismatch(MismatchReport),
}

impl Verdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Diagnostic summary of a failed byte-exact comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MismatchReport {
    /// Index of the first byte where the sequences disagree.  When one
    /// sequence is a strict prefix of the other this is the shorter length.
    pub first_divergence: usize,
    /// Length of the encoder's output.
    pub actual_len: usize,
    /// Length of the (normalized) reference.
    pub reference_len: usize,
    /// Hex window of the actual bytes around the divergence.
    pub actual_context: String,
    /// Hex window of the reference bytes around the divergence.
    pub reference_context: String,
    /// Whether the OS-byte override was applied before comparison.
    pub os_byte_overridden: bool,
}

impl MismatchReport {
    /// Build a report from two unequal sequences.
    ///
    /// Callers must only invoke this when `actual != reference`; equal inputs
    /// are a pass and produce no report.
    #[must_use]
    pub fn between(actual: &[u8], reference: &[u8], os_byte_overridden: bool) -> Self {
        let first_divergence = first_divergence(actual, reference)
            .unwrap_or_else(|| actual.len().min(reference.len()));
        Self::localized(actual, reference, first_divergence, os_byte_overridden)
    }

    /// Build a report with an externally computed divergence index.
    ///
    /// Used when equality was decided against a normalized copy of the
    /// reference: the index comes from that comparison, but the context
    /// windows show the original fixture bytes, which stay preserved for
    /// diagnostics.  `os_byte_overridden` tells the reader the OS byte in
    /// the reference context was not part of the equality check.
    #[must_use]
    pub fn localized(
        actual: &[u8],
        reference: &[u8],
        first_divergence: usize,
        os_byte_overridden: bool,
    ) -> Self {
        Self {
            first_divergence,
            actual_len: actual.len(),
            reference_len: reference.len(),
            actual_context: hex_window(actual, first_divergence),
            reference_context: hex_window(reference, first_divergence),
            os_byte_overridden,
        }
    }
}

impl fmt::Display for MismatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first divergence at byte {} (actual {} bytes, reference {} bytes); \
             actual [{}] vs reference [{}]",
            self.first_divergence,
            self.actual_len,
            self.reference_len,
            self.actual_context,
            self.reference_context,
        )
    }
}

/// Index of the first position where the two sequences disagree.
///
/// Returns the first unequal byte index, the shorter length when one
/// sequence is a strict prefix of the other, or `None` when equal.
#[must_use]
pub fn first_divergence(a: &[u8], b: &[u8]) -> Option<usize> {
    if let Some(idx) = a.iter().zip(b.iter()).position(|(x, y)| x != y) {
        return Some(idx);
    }
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    None
}

/// Hex dump of up to [`CONTEXT_BYTES`] bytes on each side of `center`.
fn hex_window(bytes: &[u8], center: usize) -> String {
    let start = center.saturating_sub(CONTEXT_BYTES);
    let end = center.saturating_add(CONTEXT_BYTES).min(bytes.len());
    if start >= end {
        return String::from("<past end>");
    }
    let mut out = String::with_capacity((end - start) * 3);
    for (i, byte) in bytes[start..end].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02x}"));
    }
    out
}
