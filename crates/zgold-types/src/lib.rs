//! Data model for the zgold parity harness.
//!
//! Closed, explicitly enumerated configuration and identity types shared by
//! the comparator, scenario matrix, and fixture store.  Option values are
//! validated up front so that invalid combinations surface as configuration
//! errors before any encoder invocation.

pub mod fixture;
pub mod options;
pub mod sample;
pub mod variant;
pub mod verdict;

pub use fixture::FixtureId;
pub use options::{EncodeOptions, Strategy, DEFAULT_LEVEL_SENTINEL};
pub use sample::Sample;
pub use variant::EncoderVariant;
pub use verdict::{MismatchReport, Verdict};
