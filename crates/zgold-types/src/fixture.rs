//! Fixture identities: string keys resolving to exactly one reference file.
//!
//! The naming convention encodes the encoder variant and the parameter
//! axis/value under test: `deflate.bin`, `deflate_level=9.bin`,
//! `deflateRaw_windowBits=15.bin`, `gzip.bin`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::variant::EncoderVariant;

/// Identity of one frozen reference byte sequence.
///
/// Invariant: one-to-one with scenarios.  No two logically distinct scenarios
/// may share a fixture identity (the matrix validator enforces this), and a
/// missing backing file is a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureId(String);

impl FixtureId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Identity for a variant's default-options fixture (`<variant>.bin`).
    #[must_use]
    pub fn defaults(variant: EncoderVariant) -> Self {
        Self(format!("{}.bin", variant.fixture_stem()))
    }

    /// Identity for one axis/value fixture (`<variant>_<axis>=<value>.bin`).
    #[must_use]
    pub fn axis(variant: EncoderVariant, axis: &str, value: impl fmt::Display) -> Self {
        Self(format!("{}_{axis}={value}.bin", variant.fixture_stem()))
    }

    /// The file name this identity resolves to under the fixture root.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
