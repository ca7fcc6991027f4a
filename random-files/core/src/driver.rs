// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{generate_random_string, FileError, FileSink, Random, RunConfig};
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Blank block printed after every report line
const SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberDraw {
    pub first: u32,
    pub second: u32,
    pub product: u64,
}

impl NumberDraw {
    pub fn new(first: u32, second: u32) -> Self {
        Self {
            first,
            second,
            product: u64::from(first) * u64::from(second),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub files: Vec<GeneratedFile>,
    pub numbers: NumberDraw,
}

/// Runs the whole program once: files first, then the two numbers
pub struct Driver<R: Random, S: FileSink> {
    config: RunConfig,
    random: R,
    sink: S,
}

impl<R: Random, S: FileSink> Driver<R, S> {
    pub fn new(config: RunConfig, random: R, sink: S) -> Self {
        Self {
            config,
            random,
            sink,
        }
    }

    /// Writes every file and the report to `out`.
    /// Stops at the first error; files already written are left in place.
    pub fn run(&mut self, out: &mut impl Write) -> Result<RunReport, RunError> {
        info!(
            files = self.config.number_of_files,
            length = self.config.file_length,
            "run started"
        );

        write!(out, "{}", SEPARATOR)?;
        writeln!(
            out,
            "Now creating {} files, with {} random letters each.",
            self.config.number_of_files, self.config.file_length
        )?;
        write!(out, "{}", SEPARATOR)?;

        let mut files = Vec::with_capacity(self.config.number_of_files);
        for index in 1..=self.config.number_of_files {
            let file = self.create_file(index)?;
            writeln!(out, "File: {} contents are: {}", file.name, file.contents)?;
            write!(out, "{}", SEPARATOR)?;
            files.push(file);
        }

        let numbers = self.draw_numbers();

        writeln!(out, "The first number is: {}", numbers.first)?;
        write!(out, "{}", SEPARATOR)?;
        writeln!(out, "The second number is: {}", numbers.second)?;
        write!(out, "{}", SEPARATOR)?;
        writeln!(
            out,
            "The product of {} and {} is {}",
            numbers.first, numbers.second, numbers.product
        )?;
        write!(out, "{}", SEPARATOR)?;
        out.flush()?;

        info!(product = numbers.product, "run finished");
        Ok(RunReport { files, numbers })
    }

    fn create_file(&mut self, index: usize) -> Result<GeneratedFile, FileError> {
        let contents = generate_random_string(&mut self.random, self.config.file_length);
        let name = RunConfig::file_name(index);

        self.sink.write_file(&name, &contents)?;
        debug!(name = %name, "file created");

        Ok(GeneratedFile { name, contents })
    }

    fn draw_numbers(&mut self) -> NumberDraw {
        let range = self.config.min_number..=self.config.max_number;
        let first = self.random.u32(range.clone());
        let second = self.random.u32(range);
        NumberDraw::new(first, second)
    }
}
