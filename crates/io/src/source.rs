//! Fixture directory access.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::IoError;

/// Fixture holding the latest water-quality sample.
pub const WATER_QUALITY_FIXTURE: &str = "water_quality";
/// Fixture holding the crop list.
pub const CROPS_FIXTURE: &str = "crops";

/// A directory of `<name>.json` mock-data files.
#[derive(Debug, Clone)]
pub struct DataSource {
    dir: PathBuf,
}

impl DataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the fixtures are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the fixture called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidName`] if `name` is empty, contains a path
    /// separator, or is `.`/`..`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, IoError> {
        let invalid = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\']);
        if invalid {
            return Err(IoError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Reads and parses fixture `name`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidName`], [`IoError::FileNotFound`],
    /// [`IoError::Read`] or [`IoError::Parse`].
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, IoError> {
        let path = self.path_for(name)?;
        debug!(path = %path.display(), "reading fixture");

        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => IoError::FileNotFound { path: path.clone() },
            _ => IoError::Read {
                path: path.clone(),
                reason: e.to_string(),
            },
        })?;

        serde_json::from_str(&text).map_err(|e| IoError::Parse {
            path,
            reason: e.to_string(),
        })
    }

    /// Reads fixture `name`, logging any failure and returning `None`.
    pub fn fetch<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        match self.read(name) {
            Ok(v) => Some(v),
            Err(e) => {
                error!(fixture = name, error = %e, "error fetching fixture data");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_for_appends_extension() {
        let src = DataSource::new("/srv/data");
        assert_eq!(
            src.path_for("crops").unwrap(),
            PathBuf::from("/srv/data/crops.json")
        );
    }

    #[test]
    fn path_for_rejects_traversal() {
        let src = DataSource::new("data");
        for name in ["", ".", "..", "../etc/passwd", "a/b", "a\\b"] {
            assert!(
                matches!(src.path_for(name), Err(IoError::InvalidName { .. })),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn dir_accessor() {
        let src = DataSource::new("fixtures");
        assert_eq!(src.dir(), Path::new("fixtures"));
    }
}
