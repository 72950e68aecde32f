//! Encoder option sets with validated ranges.
//!
//! The option vocabulary is fixed: compression level, window size, memory
//! level, strategy, priming dictionary, and the OS-byte override flag.
//! Validation runs before any encoder invocation so that a malformed scenario
//! matrix fails as a configuration error, not as a confusing mismatch.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use zgold_error::{HarnessError, Result};

use crate::variant::EncoderVariant;

/// Sentinel level meaning "use the encoder's implicit default".
pub const DEFAULT_LEVEL_SENTINEL: i32 = -1;

/// Valid wrapped window-bits range.
pub const WINDOW_BITS_RANGE: std::ops::RangeInclusive<i32> = 8..=15;

/// Internal heuristic mode of the encoder's match/emit loop.
///
/// Values mirror zlib's strategy enumerants; the raw value is what appears in
/// fixture file names (`deflate_strategy=3.bin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Default,
    Filtered,
    HuffmanOnly,
    Rle,
    Fixed,
}

impl Strategy {
    /// All strategies, in raw-value order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Filtered,
        Self::HuffmanOnly,
        Self::Rle,
        Self::Fixed,
    ];

    /// The zlib-compatible numeric value.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        match self {
            Self::Default => 0,
            Self::Filtered => 1,
            Self::HuffmanOnly => 2,
            Self::Rle => 3,
            Self::Fixed => 4,
        }
    }

    /// Parse a raw numeric strategy value.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Default),
            1 => Some(Self::Filtered),
            2 => Some(Self::HuffmanOnly),
            3 => Some(Self::Rle),
            4 => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// A complete, closed option set for one encoder invocation.
///
/// `Default` mirrors zlib's defaults: implicit level, 15 window bits,
/// memory level 8, default strategy, no dictionary, exact OS-byte equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOptions {
    /// Compression level, `-1..=9`; `-1` selects the implicit default.
    pub level: i32,
    /// Window size in bits, `8..=15`.  A negative magnitude (`-15..=-8`)
    /// selects the headerless raw framing from the wrapped entry point.
    pub window_bits: i32,
    /// Memory level, `1..=9`.
    pub mem_level: i32,
    /// Match/emit heuristic mode.
    pub strategy: Strategy,
    /// Optional priming dictionary pre-seeding the encoder's history window.
    pub dictionary: Option<Arc<[u8]>>,
    /// Ignore the gzip header's OS-identifier byte during comparison.
    /// Valid only for the archive-wrapped (gzip) variant.
    pub ignore_os_byte: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL_SENTINEL,
            window_bits: 15,
            mem_level: 8,
            strategy: Strategy::Default,
            dictionary: None,
            ignore_os_byte: false,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_window_bits(mut self, window_bits: i32) -> Self {
        self.window_bits = window_bits;
        self
    }

    #[must_use]
    pub fn with_mem_level(mut self, mem_level: i32) -> Self {
        self.mem_level = mem_level;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: impl Into<Arc<[u8]>>) -> Self {
        self.dictionary = Some(dictionary.into());
        self
    }

    #[must_use]
    pub fn with_ignore_os_byte(mut self, ignore: bool) -> Self {
        self.ignore_os_byte = ignore;
        self
    }

    /// Whether the window-bits value selects raw framing via the
    /// negative-magnitude convention.
    #[must_use]
    pub const fn is_raw_window(&self) -> bool {
        self.window_bits < 0
    }

    /// Validate every field against its range and the selected variant.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptions` for out-of-range values and
    /// `NormalizerMisuse` when the OS-byte override is requested for a
    /// variant whose format has no OS field.
    pub fn validate(&self, variant: EncoderVariant) -> Result<()> {
        if !(DEFAULT_LEVEL_SENTINEL..=9).contains(&self.level) {
            return Err(HarnessError::invalid_option("level", self.level));
        }
        let wrapped_ok = WINDOW_BITS_RANGE.contains(&self.window_bits);
        let raw_ok = self
            .window_bits
            .checked_neg()
            .is_some_and(|w| WINDOW_BITS_RANGE.contains(&w));
        if !wrapped_ok && !raw_ok {
            return Err(HarnessError::invalid_option(
                "window_bits",
                self.window_bits,
            ));
        }
        if !(1..=9).contains(&self.mem_level) {
            return Err(HarnessError::invalid_option("mem_level", self.mem_level));
        }
        if self.ignore_os_byte && !variant.has_os_byte() {
            return Err(HarnessError::NormalizerMisuse {
                variant: variant.to_string(),
            });
        }
        Ok(())
    }
}
