// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Constants of a run. There is no runtime source for these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub number_of_files: usize,
    pub file_length: usize,
    pub min_number: u32,
    pub max_number: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            number_of_files: 3,
            file_length: 10,
            min_number: 1,
            max_number: 42,
        }
    }
}

impl RunConfig {
    /// Name of the `index`th file, counting from 1
    pub fn file_name(index: usize) -> String {
        format!("file{}.txt", index)
    }
}
