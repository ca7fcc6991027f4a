// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{FileError, FileSink};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Writes each file into a single directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn write_file(&mut self, name: &str, contents: &str) -> Result<(), FileError> {
        let path = self.dir.join(name);

        // File::create truncates an existing file
        let mut file = File::create(&path).map_err(|source| FileError::Create {
            path: path.clone(),
            source,
        })?;

        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| FileError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = contents.len(), "file written");
        Ok(())
    }
}
