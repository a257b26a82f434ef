// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use lazy_static::lazy_static;
use log::{set_logger, set_max_level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

static TEST_LOGGER: TestLogger = TestLogger;

lazy_static! {
    static ref LOGGER_INSTALLED: Mutex<bool> = Mutex::new(false);
}

struct TestLogger;

impl Log for TestLogger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        // println! output is captured by the test harness, and only shown for
        // failing tests.
        println!("{} {} {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Install a test-friendly logger, so the parser's trace output shows up
/// alongside failing tests. Logging will be enabled at the given level, or at
/// "Trace" if no other level was specified. Later calls only adjust the level,
/// so every test can call this.
pub fn set_test_logger(max_log_level: Option<LevelFilter>) {
    let mut installed = match LOGGER_INSTALLED.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    set_max_level(max_log_level.unwrap_or(LevelFilter::Trace));
    if !*installed {
        // Some other logger may already be installed; that's fine too.
        let _ = set_logger(&TEST_LOGGER);
        *installed = true;
    }
}
