//! Matrix runner: executes scenarios and folds verdicts into a run report.
//!
//! Failures are scenario-local: a missing fixture or encoder failure in one
//! case never aborts its siblings.  The report is serde-serializable and
//! carries the corpus fingerprint for traceability; `all_passed` drives the
//! harness exit status.

use serde::{Deserialize, Serialize};
use tracing::{error, info};
use zgold_error::Result;
use zgold_types::{EncoderVariant, FixtureId, MismatchReport, Verdict};

use crate::compare::{compare, Encoder};
use crate::corpus::SampleCorpus;
use crate::fixture_store::FixtureStore;
use crate::matrix::{validate_matrix, DictionarySource, Scenario};

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioOutcome {
    /// Byte-exact match against the frozen reference.
    Pass,
    /// The sequences diverged after normalization.
    Mismatch(MismatchReport),
    /// The scenario could not be compared at all (missing fixture, encoder
    /// failure, configuration error).  Never counted as a pass.
    Error { class: String, detail: String },
}

/// Per-scenario entry of the run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub label: String,
    pub variant: EncoderVariant,
    pub fixture: FixtureId,
    pub outcome: ScenarioOutcome,
}

/// Structured report for a full matrix run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixReport {
    /// SHA-256 fingerprint of the input corpus.
    pub corpus_fingerprint: String,
    pub total: usize,
    pub passed: usize,
    pub mismatched: usize,
    pub errored: usize,
    pub scenarios: Vec<ScenarioReport>,
}

impl MatrixReport {
    /// Whether every scenario passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Process exit code for this run: zero iff every scenario passed.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }
}

/// Run every scenario against the encoder, corpus, and fixture store.
///
/// Scenarios are independent and order-free; this runner executes them
/// sequentially, folding every per-scenario failure into its outcome rather
/// than propagating it.
///
/// # Errors
///
/// Returns a configuration error when the matrix itself is malformed
/// (duplicate fixture identities, invalid option sets, misplaced OS-byte
/// override); nothing runs in that case.
pub fn run_matrix(
    encoder: &dyn Encoder,
    corpus: &SampleCorpus,
    store: &FixtureStore,
    scenarios: &[Scenario],
) -> Result<MatrixReport> {
    validate_matrix(scenarios)?;

    let mut report = MatrixReport {
        corpus_fingerprint: corpus.fingerprint(),
        total: scenarios.len(),
        passed: 0,
        mismatched: 0,
        errored: 0,
        scenarios: Vec::with_capacity(scenarios.len()),
    };

    for scenario in scenarios {
        let outcome = run_scenario(encoder, corpus, store, scenario);
        match &outcome {
            ScenarioOutcome::Pass => {
                report.passed += 1;
                info!(
                    label = %scenario.label,
                    fixture = %scenario.fixture,
                    "scenario passed"
                );
            }
            ScenarioOutcome::Mismatch(mismatch) => {
                report.mismatched += 1;
                error!(
                    label = %scenario.label,
                    fixture = %scenario.fixture,
                    first_divergence = mismatch.first_divergence,
                    actual_len = mismatch.actual_len,
                    reference_len = mismatch.reference_len,
                    "scenario mismatched"
                );
            }
            ScenarioOutcome::Error { class, detail } => {
                report.errored += 1;
                error!(
                    label = %scenario.label,
                    fixture = %scenario.fixture,
                    class = %class,
                    detail = %detail,
                    "scenario errored"
                );
            }
        }
        report.scenarios.push(ScenarioReport {
            label: scenario.label.clone(),
            variant: scenario.variant,
            fixture: scenario.fixture.clone(),
            outcome,
        });
    }

    Ok(report)
}

/// Execute one scenario, folding every failure into its outcome.
fn run_scenario(
    encoder: &dyn Encoder,
    corpus: &SampleCorpus,
    store: &FixtureStore,
    scenario: &Scenario,
) -> ScenarioOutcome {
    let result = (|| {
        let sample = corpus.get(&scenario.sample)?;
        let mut options = scenario.options.clone();
        match &scenario.dictionary {
            None => {}
            Some(DictionarySource::Literal(bytes)) => {
                options.dictionary = Some(bytes.clone().into());
            }
            Some(DictionarySource::CorpusSample(name)) => {
                options.dictionary = Some(corpus.get(name)?.shared_bytes());
            }
        }
        compare(
            encoder,
            scenario.variant,
            sample,
            &options,
            &scenario.fixture,
            store,
        )
    })();

    match result {
        Ok(Verdict::Pass) => ScenarioOutcome::Pass,
        Ok(Verdict::Mismatch(report)) => ScenarioOutcome::Mismatch(report),
        Err(err) => ScenarioOutcome::Error {
            class: format!("{:?}", err.class()),
            detail: err.to_string(),
        },
    }
}
