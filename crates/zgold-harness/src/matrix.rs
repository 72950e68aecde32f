//! The scenario matrix: every (variant × axis × value) combination the
//! harness exercises, each bound to exactly one fixture identity.
//!
//! The enumeration is data, not logic.  It mirrors the frozen reference set:
//! defaults per variant, the full level / window-bits / mem-level / strategy
//! ranges, raw-mode levels, and two priming-dictionary cases.  Reducing the
//! coverage surface requires explicit justification.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use zgold_error::{HarnessError, Result};
use zgold_types::{EncodeOptions, EncoderVariant, FixtureId, Strategy};

use crate::corpus::{SHARED_DICTIONARY_SAMPLE, STANDARD_TEXT_SAMPLE};

/// The small literal priming dictionary exercised by the matrix.
///
/// Matches the reference generator's literal byte-for-byte (note: no `q`).
pub const TRIVIAL_DICTIONARY: &[u8] = b"abcdefghijklmnoprstuvwxyz";

/// Where a scenario's priming dictionary comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DictionarySource {
    /// A small literal dictionary baked into the matrix.
    Literal(Vec<u8>),
    /// A realistically sized shared dictionary drawn from the sample corpus.
    CorpusSample(String),
}

/// One entry of the matrix: an independent, order-free verification case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable label identifying the axis and value under test.
    pub label: String,
    /// Output framing exercised.
    pub variant: EncoderVariant,
    /// Corpus name of the input sample.
    pub sample: String,
    /// Option set for the encoder invocation.  The dictionary field is
    /// populated by the runner from `dictionary`, keeping the matrix pure
    /// data.
    pub options: EncodeOptions,
    /// Priming dictionary source, if any.
    pub dictionary: Option<DictionarySource>,
    /// The frozen reference this case is compared against.
    pub fixture: FixtureId,
}

impl Scenario {
    fn new(
        label: impl Into<String>,
        variant: EncoderVariant,
        options: EncodeOptions,
        fixture: FixtureId,
    ) -> Self {
        Self {
            label: label.into(),
            variant,
            sample: STANDARD_TEXT_SAMPLE.to_owned(),
            options,
            dictionary: None,
            fixture,
        }
    }
}

/// Enumerate the full binary-compare matrix against the standard text sample.
#[must_use]
pub fn binary_compare_matrix() -> Vec<Scenario> {
    let mut scenarios = Vec::new();

    // Defaults per variant.  The gzip header's OS byte varies by host, so
    // that one case runs with the override; all others demand exact bytes.
    scenarios.push(Scenario::new(
        "deflate, no options",
        EncoderVariant::Deflate,
        EncodeOptions::default(),
        FixtureId::defaults(EncoderVariant::Deflate),
    ));
    scenarios.push(Scenario::new(
        "deflate raw, no options",
        EncoderVariant::DeflateRaw,
        EncodeOptions::default(),
        FixtureId::defaults(EncoderVariant::DeflateRaw),
    ));
    scenarios.push(Scenario::new(
        "gzip, no options",
        EncoderVariant::Gzip,
        EncodeOptions::default().with_ignore_os_byte(true),
        FixtureId::defaults(EncoderVariant::Gzip),
    ));

    // Level axis, full discrete range plus the implicit-default sentinel.
    for level in (1..=9).rev() {
        scenarios.push(Scenario::new(
            format!("level {level}"),
            EncoderVariant::Deflate,
            EncodeOptions::default().with_level(level),
            FixtureId::axis(EncoderVariant::Deflate, "level", level),
        ));
    }
    scenarios.push(Scenario::new(
        "level -1 (implicit default)",
        EncoderVariant::Deflate,
        EncodeOptions::default().with_level(-1),
        FixtureId::axis(EncoderVariant::Deflate, "level", -1),
    ));

    // Window-bits axis, including the negative-magnitude raw convention.
    for bits in (8..=15).rev() {
        scenarios.push(Scenario::new(
            format!("windowBits {bits}"),
            EncoderVariant::Deflate,
            EncodeOptions::default().with_window_bits(bits),
            FixtureId::axis(EncoderVariant::Deflate, "windowBits", bits),
        ));
    }
    // windowBits -15 through the wrapped entry point selects raw framing;
    // the reference is therefore the raw fixture.
    scenarios.push(Scenario::new(
        "windowBits -15 (implicit raw)",
        EncoderVariant::Deflate,
        EncodeOptions::default().with_window_bits(-15),
        FixtureId::axis(EncoderVariant::DeflateRaw, "windowBits", 15),
    ));

    // Memory-level axis.
    for mem_level in (1..=9).rev() {
        scenarios.push(Scenario::new(
            format!("memLevel {mem_level}"),
            EncoderVariant::Deflate,
            EncodeOptions::default().with_mem_level(mem_level),
            FixtureId::axis(EncoderVariant::Deflate, "memLevel", mem_level),
        ));
    }

    // Strategy axis, all enumerants.
    for strategy in Strategy::ALL {
        let raw = strategy.as_raw();
        scenarios.push(Scenario::new(
            format!("strategy {raw} ({strategy:?})"),
            EncoderVariant::Deflate,
            EncodeOptions::default().with_strategy(strategy),
            FixtureId::axis(EncoderVariant::Deflate, "strategy", raw),
        ));
    }

    // Raw variant levels.  The difference from the wrapped variant is only
    // the framing, so store/fast/slow method coverage is enough.
    for level in [4, 1] {
        scenarios.push(Scenario::new(
            format!("raw level {level}"),
            EncoderVariant::DeflateRaw,
            EncodeOptions::default().with_level(level),
            FixtureId::axis(EncoderVariant::DeflateRaw, "level", level),
        ));
    }

    // Priming dictionaries: one small literal, one realistically sized
    // shared dictionary drawn from the corpus.
    let mut trivial = Scenario::new(
        "trivial dictionary",
        EncoderVariant::Deflate,
        EncodeOptions::default(),
        FixtureId::axis(EncoderVariant::Deflate, "dictionary", "trivial"),
    );
    trivial.dictionary = Some(DictionarySource::Literal(TRIVIAL_DICTIONARY.to_vec()));
    scenarios.push(trivial);

    let mut spdy = Scenario::new(
        "spdy dictionary",
        EncoderVariant::Deflate,
        EncodeOptions::default(),
        FixtureId::axis(EncoderVariant::Deflate, "dictionary", "spdy"),
    );
    spdy.dictionary = Some(DictionarySource::CorpusSample(
        SHARED_DICTIONARY_SAMPLE.to_owned(),
    ));
    scenarios.push(spdy);

    scenarios
}

/// Check that a matrix is well-formed before anything runs.
///
/// Enforced invariants: fixture identities and labels are one-to-one with
/// scenarios, every option set validates for its variant, and the OS-byte
/// override is requested exactly for the archive-wrapped cases.
///
/// # Errors
///
/// Returns a configuration error naming the offending scenario.
pub fn validate_matrix(scenarios: &[Scenario]) -> Result<()> {
    let mut fixtures = BTreeSet::new();
    let mut labels = BTreeSet::new();

    for scenario in scenarios {
        if !fixtures.insert(scenario.fixture.clone()) {
            return Err(HarnessError::invalid_option(
                "fixture (shared by two scenarios)",
                &scenario.fixture,
            ));
        }
        if !labels.insert(scenario.label.clone()) {
            return Err(HarnessError::invalid_option(
                "label (shared by two scenarios)",
                &scenario.label,
            ));
        }
        scenario.options.validate(scenario.variant)?;
        if scenario.variant.has_os_byte() != scenario.options.ignore_os_byte {
            return Err(HarnessError::invalid_option(
                format!("ignore_os_byte for '{}'", scenario.label),
                scenario.options.ignore_os_byte,
            ));
        }
    }
    Ok(())
}
