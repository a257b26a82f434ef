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
use log::{error, info};
use std::io::{self, Write};

/// Output is where a command writes anything meant for the user. It has two
/// channels: `write` for normal output (e.g. help text), and `write_error` for
/// error messages. The parser itself only ever writes complete,
/// newline-terminated messages to the error channel.
pub trait Output {
    /// Write a message to the normal output channel.
    fn write(&mut self, message: &str) -> Result<()>;
    /// Write a message to the error channel.
    fn write_error(&mut self, message: &str) -> Result<()>;
}

fn write_to_io_writer<W: Write>(mut writer: W, message: &str) -> Result<()> {
    writer.write_all(message.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// StdOutput writes normal output to stdout, and errors to stderr. This is
/// what a typical binary should use.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdOutput;

impl Output for StdOutput {
    fn write(&mut self, message: &str) -> Result<()> {
        write_to_io_writer(io::stdout(), message)
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        write_to_io_writer(io::stderr(), message)
    }
}

/// LogOutput routes normal output through `info!()` and errors through
/// `error!()`, with trailing newlines removed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOutput;

impl Output for LogOutput {
    fn write(&mut self, message: &str) -> Result<()> {
        info!("{}", message.trim_end_matches('\n'));
        Ok(())
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        error!("{}", message.trim_end_matches('\n'));
        Ok(())
    }
}

/// NullOutput silently discards everything written to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOutput;

impl Output for NullOutput {
    fn write(&mut self, _: &str) -> Result<()> {
        Ok(())
    }

    fn write_error(&mut self, _: &str) -> Result<()> {
        Ok(())
    }
}
