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

use crate::error::*;
use crate::output::Output;

/// RecordingOutput is an `Output` which keeps every message written to it, so
/// tests can assert on exactly what a command printed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordingOutput {
    output: Vec<String>,
    errors: Vec<String>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        RecordingOutput::default()
    }

    /// Every message written to the normal channel, in order.
    pub fn get_output_messages(&self) -> &[String] {
        self.output.as_slice()
    }

    /// Every message written to the error channel, in order.
    pub fn get_error_messages(&self) -> &[String] {
        self.errors.as_slice()
    }

    /// All normal output, concatenated.
    pub fn get_output(&self) -> String {
        self.output.concat()
    }

    /// All error output, concatenated.
    pub fn get_errors(&self) -> String {
        self.errors.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.errors.is_empty()
    }
}

impl Output for RecordingOutput {
    fn write(&mut self, message: &str) -> Result<()> {
        self.output.push(message.to_owned());
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_owned());
        Ok(())
    }
}
