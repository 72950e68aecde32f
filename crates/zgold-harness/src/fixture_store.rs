//! Read-only, file-addressed fixture store.
//!
//! Maps a [`FixtureId`] to a file under a fixed root and returns its raw
//! contents.  No decoding, no trimming, no caching machinery — fixtures are
//! small, read-only, and exactness is the entire point.  The store is an
//! explicitly constructed instance, never an ambient singleton, so scenarios
//! stay composable and parallel-safe.

use std::fs;
use std::path::{Path, PathBuf};

use zgold_error::{HarnessError, Result};
use zgold_types::FixtureId;

/// Read-only repository of frozen reference byte sequences.
///
/// Shared by reference across scenarios; concurrent reads need no locking
/// since nothing writes during a run.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    root: PathBuf,
}

impl FixtureStore {
    /// Open a store rooted at `root`.  The directory is not required to
    /// exist yet; every missing fixture surfaces at `load` time.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a fixture identity resolves to.
    #[must_use]
    pub fn resolve(&self, id: &FixtureId) -> PathBuf {
        self.root.join(id.file_name())
    }

    /// Whether a backing file exists for this identity.
    #[must_use]
    pub fn contains(&self, id: &FixtureId) -> bool {
        self.resolve(id).is_file()
    }

    /// Load the full reference byte sequence for `id`.
    ///
    /// # Errors
    ///
    /// `MissingFixture` when no backing file exists — fatal for the scenario,
    /// never a silent skip or pass.  Other I/O failures propagate as `Io`.
    pub fn load(&self, id: &FixtureId) -> Result<Vec<u8>> {
        let path = self.resolve(id);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(HarnessError::MissingFixture {
                    id: id.file_name().to_owned(),
                    path,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Sorted file names present under the root, for diagnostics.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the root cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}
