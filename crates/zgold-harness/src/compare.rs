//! The comparator: byte-exact verification of one encoder invocation.
//!
//! Pure except for the fixture read and the encoder call.  No fixture is
//! ever written or mutated here — fixtures are write-once, read-many, which
//! protects against tests silently "fixing" broken ground truth.

use zgold_error::{HarnessError, Result};
use zgold_types::verdict::first_divergence;
use zgold_types::{EncodeOptions, EncoderVariant, FixtureId, MismatchReport, Sample, Verdict};

use crate::fixture_store::FixtureStore;
use crate::normalize::normalize;

/// The encoder under test, as an opaque deterministic function.
///
/// Implementations must be pure for fixed `(variant, input, options)`:
/// identical calls yield identical byte sequences.  The raw-mode convention
/// applies — a negative `window_bits` through the [`EncoderVariant::Deflate`]
/// entry point must produce headerless raw output.
pub trait Encoder {
    /// Produce the complete framed output for `input` under `options`.
    fn encode(
        &self,
        variant: EncoderVariant,
        input: &[u8],
        options: &EncodeOptions,
    ) -> std::result::Result<Vec<u8>, String>;
}

/// Compare one encoder invocation against its frozen reference.
///
/// Algorithm: validate options, invoke the encoder, load the reference,
/// normalize (at most one positional override, only when requested), then
/// ordered byte-for-byte equality over length and content, no tolerance.
/// No special-casing by sample size or option extremity: a zero-length
/// sample or an option at the edge of its range compares like any other.
///
/// # Errors
///
/// Configuration errors (invalid options, normalizer misuse) surface before
/// the encoder runs.  `EncoderFailure` propagates encoder errors with no
/// retry; `MissingFixture` is fatal for the scenario.
pub fn compare(
    encoder: &dyn Encoder,
    variant: EncoderVariant,
    sample: &Sample,
    options: &EncodeOptions,
    fixture: &FixtureId,
    store: &FixtureStore,
) -> Result<Verdict> {
    options.validate(variant)?;

    let actual = encoder
        .encode(variant, sample.bytes(), options)
        .map_err(|detail| HarnessError::EncoderFailure {
            scenario: fixture.file_name().to_owned(),
            detail,
        })?;

    let reference = store.load(fixture)?;
    let normalized = normalize(&reference, &actual, options, variant)?;

    // Equality is decided against the normalized copy, but the report shows
    // the fixture's original bytes; `os_byte_overridden` tells the reader
    // the OS byte in that context was exempt from the comparison.
    match first_divergence(&actual, normalized.as_ref()) {
        None => Ok(Verdict::Pass),
        Some(index) => Ok(Verdict::Mismatch(MismatchReport::localized(
            &actual,
            &reference,
            index,
            options.ignore_os_byte,
        ))),
    }
}

/// Check the determinism half of the encoder contract: two invocations with
/// identical inputs must yield identical byte sequences.  Independent of any
/// fixture comparison.
///
/// # Errors
///
/// `EncoderFailure` when either invocation fails, `Internal` when the two
/// outputs differ.
pub fn verify_determinism(
    encoder: &dyn Encoder,
    variant: EncoderVariant,
    sample: &Sample,
    options: &EncodeOptions,
) -> Result<()> {
    options.validate(variant)?;
    let run = || {
        encoder
            .encode(variant, sample.bytes(), options)
            .map_err(|detail| HarnessError::EncoderFailure {
                scenario: format!("determinism check for sample '{}'", sample.name()),
                detail,
            })
    };
    let first = run()?;
    let second = run()?;
    if first == second {
        Ok(())
    } else {
        Err(HarnessError::internal(format!(
            "encoder is not deterministic for sample '{}' ({} vs {} bytes)",
            sample.name(),
            first.len(),
            second.len(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicU8, Ordering};

    /// Stub encoder: length prefix + input bytes, reversed at level 9.
    /// Deterministic and sensitive to one option, which is all these
    /// comparator tests need.
    struct StubEncoder;

    impl Encoder for StubEncoder {
        fn encode(
            &self,
            _variant: EncoderVariant,
            input: &[u8],
            options: &EncodeOptions,
        ) -> std::result::Result<Vec<u8>, String> {
            let mut out = vec![u8::try_from(input.len() % 256).unwrap_or(0)];
            if options.level == 9 {
                out.extend(input.iter().rev());
            } else {
                out.extend_from_slice(input);
            }
            Ok(out)
        }
    }

    struct FailingEncoder;

    impl Encoder for FailingEncoder {
        fn encode(
            &self,
            _variant: EncoderVariant,
            _input: &[u8],
            _options: &EncodeOptions,
        ) -> std::result::Result<Vec<u8>, String> {
            Err("stream error".to_owned())
        }
    }

    fn store_with(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> FixtureStore {
        fs::write(dir.path().join(name), bytes).unwrap();
        FixtureStore::new(dir.path())
    }

    #[test]
    fn test_pass_when_bytes_match() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "deflate.bin", &[4, b'a', b'b', b'c', b'd']);
        let sample = Sample::new("s", b"abcd".to_vec());

        let verdict = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap();
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_mismatch_reports_first_divergence() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "deflate.bin", &[4, b'a', b'X', b'c', b'd']);
        let sample = Sample::new("s", b"abcd".to_vec());

        let verdict = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap();
        match verdict {
            Verdict::Mismatch(report) => {
                assert_eq!(report.first_divergence, 2);
                assert_eq!(report.actual_len, 5);
                assert_eq!(report.reference_len, 5);
            }
            Verdict::Pass => panic!("expected mismatch"),
        }
    }

    #[test]
    fn test_option_sensitivity_changes_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "deflate_level=9.bin", &[4, b'd', b'c', b'b', b'a']);
        let sample = Sample::new("s", b"abcd".to_vec());
        let id = FixtureId::new("deflate_level=9.bin");

        let at_nine = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default().with_level(9),
            &id,
            &store,
        )
        .unwrap();
        assert!(at_nine.is_pass());

        let at_default = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &id,
            &store,
        )
        .unwrap();
        assert!(!at_default.is_pass());
    }

    #[test]
    fn test_zero_length_sample_is_not_special() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "deflate.bin", &[0]);
        let sample = Sample::new("empty", Vec::new());

        let verdict = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap();
        assert!(verdict.is_pass());
    }

    #[test]
    fn test_missing_fixture_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path());
        let sample = Sample::new("s", b"abcd".to_vec());

        let err = compare(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, HarnessError::MissingFixture { .. }));
    }

    #[test]
    fn test_encoder_failure_propagates_with_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "deflate.bin", b"irrelevant");
        let sample = Sample::new("s", b"abcd".to_vec());

        let err = compare(
            &FailingEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap_err();
        match err {
            HarnessError::EncoderFailure { scenario, detail } => {
                assert_eq!(scenario, "deflate.bin");
                assert_eq!(detail, "stream error");
            }
            other => panic!("expected EncoderFailure, got {other}"),
        }
    }

    #[test]
    fn test_invalid_options_fail_before_encoder_runs() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path());
        let sample = Sample::new("s", b"abcd".to_vec());

        // FailingEncoder would error if invoked; the config error wins.
        let err = compare(
            &FailingEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default().with_level(42),
            &FixtureId::new("deflate.bin"),
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, HarnessError::InvalidOptions { .. }));
    }

    /// Emits a fixed byte sequence regardless of input.
    struct FixedEncoder(Vec<u8>);

    impl Encoder for FixedEncoder {
        fn encode(
            &self,
            _variant: EncoderVariant,
            _input: &[u8],
            _options: &EncodeOptions,
        ) -> std::result::Result<Vec<u8>, String> {
            Ok(self.0.clone())
        }
    }

    fn gzip_member(os: u8, payload: &[u8]) -> Vec<u8> {
        let mut out = vec![0x1f, 0x8b, 0x08, 0x00, 0, 0, 0, 0, 0x00, os];
        out.extend_from_slice(payload);
        out.extend_from_slice(&[0u8; 8]);
        out
    }

    #[test]
    fn test_non_gzip_output_under_gzip_scenario_is_a_mismatch() {
        // An encoder regression that produces non-gzip framing is a verdict
        // about the encoder, not a configuration error.
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, "gzip.bin", &gzip_member(3, b"abcdef"));
        let sample = Sample::new("s", b"abcdef".to_vec());

        let verdict = compare(
            &FixedEncoder(vec![0x78, 0x9c]),
            EncoderVariant::Gzip,
            &sample,
            &EncodeOptions::default().with_ignore_os_byte(true),
            &FixtureId::new("gzip.bin"),
            &store,
        )
        .unwrap();
        match verdict {
            Verdict::Mismatch(report) => {
                assert_eq!(report.first_divergence, 0);
                assert_eq!(report.actual_len, 2);
            }
            Verdict::Pass => panic!("expected mismatch"),
        }
    }

    #[test]
    fn test_mismatch_report_preserves_original_reference_bytes() {
        // Divergence is located against the normalized copy (so the exempt
        // OS byte is never the reported index), but the reference context
        // shows the fixture's own bytes, OS byte included.
        let dir = tempfile::tempdir().unwrap();
        let reference = gzip_member(11, b"abcdef");
        let store = store_with(&dir, "gzip.bin", &reference);

        let mut actual = gzip_member(3, b"abcdef");
        actual[12] ^= 0xff; // third payload byte
        let sample = Sample::new("s", b"abcdef".to_vec());

        let verdict = compare(
            &FixedEncoder(actual),
            EncoderVariant::Gzip,
            &sample,
            &EncodeOptions::default().with_ignore_os_byte(true),
            &FixtureId::new("gzip.bin"),
            &store,
        )
        .unwrap();
        match verdict {
            Verdict::Mismatch(report) => {
                assert_eq!(report.first_divergence, 12);
                assert!(report.os_byte_overridden);
                // Context window starts at byte 0 here, so token 9 is the
                // OS byte: the fixture's 0x0b, not the patched 0x03.
                let token = report.reference_context.split(' ').nth(9).unwrap();
                assert_eq!(token, "0b");
            }
            Verdict::Pass => panic!("expected mismatch"),
        }
    }

    #[test]
    fn test_verify_determinism_accepts_pure_encoder() {
        let sample = Sample::new("s", b"abcd".to_vec());
        verify_determinism(
            &StubEncoder,
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
        )
        .unwrap();
    }

    #[test]
    fn test_verify_determinism_rejects_impure_encoder() {
        struct Impure(AtomicU8);

        impl Encoder for Impure {
            fn encode(
                &self,
                _variant: EncoderVariant,
                _input: &[u8],
                _options: &EncodeOptions,
            ) -> std::result::Result<Vec<u8>, String> {
                Ok(vec![self.0.fetch_add(1, Ordering::SeqCst)])
            }
        }

        let sample = Sample::new("s", b"abcd".to_vec());
        let err = verify_determinism(
            &Impure(AtomicU8::new(0)),
            EncoderVariant::Deflate,
            &sample,
            &EncodeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HarnessError::Internal(_)));
    }
}
