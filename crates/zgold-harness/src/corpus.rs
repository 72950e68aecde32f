//! Sample corpus: named immutable input byte sequences.
//!
//! Boundary collaborator — loading is plain file reads, one sample per file,
//! named by file stem.  Samples are loaded once at harness start and shared
//! read-only for the rest of the run.  A SHA-256 fingerprint over the corpus
//! is recorded in run reports for traceability.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use zgold_error::{HarnessError, Result};
use zgold_types::Sample;

/// Stable identifier of the standard text sample.
pub const STANDARD_TEXT_SAMPLE: &str = "lorem_en_100k";

/// Stable identifier of the shared-dictionary sample.
pub const SHARED_DICTIONARY_SAMPLE: &str = "spdy_dict";

/// An immutable, name-addressed collection of input samples.
#[derive(Debug, Clone)]
pub struct SampleCorpus {
    dir: PathBuf,
    samples: BTreeMap<String, Sample>,
}

impl SampleCorpus {
    /// Load every regular file under `dir` as a sample named by its stem.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the directory cannot be read.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let mut samples = BTreeMap::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            let bytes = fs::read(&path)?;
            samples.insert(stem.clone(), Sample::new(stem, bytes));
        }
        Ok(Self { dir, samples })
    }

    /// Build a corpus from in-memory samples (tests, synthetic runs).
    #[must_use]
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self {
            dir: PathBuf::new(),
            samples: samples
                .into_iter()
                .map(|s| (s.name().to_owned(), s))
                .collect(),
        }
    }

    /// Look up a sample by its stable identifier.
    ///
    /// # Errors
    ///
    /// `SampleNotFound` when no sample carries that name.
    pub fn get(&self, name: &str) -> Result<&Sample> {
        self.samples
            .get(name)
            .ok_or_else(|| HarnessError::SampleNotFound {
                name: name.to_owned(),
                path: self.dir.join(name),
            })
    }

    /// The standard text sample.
    ///
    /// # Errors
    ///
    /// `SampleNotFound` when the corpus lacks it.
    pub fn standard_text(&self) -> Result<&Sample> {
        self.get(STANDARD_TEXT_SAMPLE)
    }

    /// The shared-dictionary sample.
    ///
    /// # Errors
    ///
    /// `SampleNotFound` when the corpus lacks it.
    pub fn shared_dictionary(&self) -> Result<&Sample> {
        self.get(SHARED_DICTIONARY_SAMPLE)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// SHA-256 fingerprint over all sample names and bytes, in name order.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"corpus-v1:");
        for (name, sample) in &self.samples {
            hasher.update(name.as_bytes());
            hasher.update(b":");
            hasher.update(sample.bytes());
            hasher.update(b"\n");
        }
        let digest = hasher.finalize();
        let mut hex = String::with_capacity(64);
        for byte in digest {
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
