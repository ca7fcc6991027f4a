// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::FileError;

/// Destination for generated files
pub trait FileSink {
    /// Create or overwrite `name` so that it holds exactly `contents`.
    /// The file is released before this returns, on success or failure.
    fn write_file(&mut self, name: &str, contents: &str) -> Result<(), FileError>;
}

impl<T: FileSink + ?Sized> FileSink for &mut T {
    fn write_file(&mut self, name: &str, contents: &str) -> Result<(), FileError> {
        (**self).write_file(name, contents)
    }
}
