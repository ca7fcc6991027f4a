// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

mod logging;

use random_files_core::{DirectorySink, Driver, RngRandom, RunConfig};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let random = RngRandom::from_entropy();
    let sink = DirectorySink::current_dir();
    let mut driver = Driver::new(RunConfig::default(), random, sink);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.run(&mut out)?;

    Ok(())
}
