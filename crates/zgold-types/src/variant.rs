//! The closed set of encoder output framings under test.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output framing produced by the encoder under test.
///
/// The set is closed: every scenario exercises exactly one of these, and the
/// fixture naming convention encodes the variant into the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EncoderVariant {
    /// Wrapped stream: 2-byte zlib header + compressed data + 4-byte Adler-32.
    Deflate,
    /// Raw stream: compressed data only, no header or trailer.
    DeflateRaw,
    /// Archive-wrapped stream: 10-byte gzip header (including the
    /// OS-identifier byte) + compressed data + 8-byte CRC-32/ISIZE trailer.
    Gzip,
}

impl EncoderVariant {
    /// All variants, in fixture-naming order.
    pub const ALL: [Self; 3] = [Self::Deflate, Self::DeflateRaw, Self::Gzip];

    /// Total header + trailer bytes this framing adds around the compressed
    /// payload, assuming no optional header extensions.
    #[must_use]
    pub const fn framing_overhead(self) -> usize {
        match self {
            Self::Deflate => 2 + 4,
            Self::DeflateRaw => 0,
            Self::Gzip => 10 + 8,
        }
    }

    /// Whether this framing carries an OS-identifier byte in its header.
    ///
    /// Only the gzip format does; requesting the OS-byte override for any
    /// other variant is a configuration error.
    #[must_use]
    pub const fn has_os_byte(self) -> bool {
        matches!(self, Self::Gzip)
    }

    /// Fixture-name stem for this variant (`deflate`, `deflateRaw`, `gzip`).
    #[must_use]
    pub const fn fixture_stem(self) -> &'static str {
        match self {
            Self::Deflate => "deflate",
            Self::DeflateRaw => "deflateRaw",
            Self::Gzip => "gzip",
        }
    }
}

impl fmt::Display for EncoderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fixture_stem())
    }
}
