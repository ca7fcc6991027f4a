// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod random_string;
pub use random_string::generate_random_string;

mod random;
pub use random::Random;

mod rng_random;
pub use rng_random::RngRandom;

mod file_sink;
pub use file_sink::FileSink;

mod file_error;
pub use file_error::FileError;

mod directory_sink;
pub use directory_sink::DirectorySink;

mod run_config;
pub use run_config::RunConfig;

mod driver;
pub use driver::{Driver, GeneratedFile, NumberDraw, RunError, RunReport};
