//! Golden-fixture parity harness for a streaming deflate encoder.
//!
//! Verifies an encoder's byte-exact output against frozen reference output
//! captured from a trusted zlib implementation, across a matrix of option
//! combinations.  The single sanctioned relaxation of equality is the gzip
//! header's OS-identifier byte, which legitimately varies by host.
//!
//! This crate is intentionally not "just tests": the comparator, fixture
//! store, and matrix runner are reusable verification tooling that an encoder
//! crate can drive from its own test suites.
//!
//! # Control flow
//!
//! [`matrix::binary_compare_matrix`] enumerates scenarios → each scenario
//! invokes [`compare::compare`] with (encoder, sample, options, fixture id) →
//! the comparator loads the reference from [`fixture_store::FixtureStore`],
//! calls the encoder, applies [`normalize::normalize`] when requested, and
//! performs exact byte-sequence equality → [`runner::run_matrix`] folds the
//! verdicts into a [`runner::MatrixReport`].

pub mod compare;
pub mod corpus;
pub mod fixture_store;
pub mod matrix;
pub mod normalize;
pub mod runner;

pub use compare::{compare, verify_determinism, Encoder};
pub use corpus::{SampleCorpus, SHARED_DICTIONARY_SAMPLE, STANDARD_TEXT_SAMPLE};
pub use fixture_store::FixtureStore;
pub use matrix::{binary_compare_matrix, validate_matrix, DictionarySource, Scenario};
pub use runner::{run_matrix, MatrixReport, ScenarioOutcome, ScenarioReport};
