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

use thiserror::Error;

/// Error represents the failures which are surfaced to the *programmer*
/// embedding this library: malformed command definitions, readers which
/// couldn't convert a value, command actions which failed, and so on. Mistakes
/// made by the *user* on the command line are described by `UsageError`
/// instead, and are reported through an `Output` rather than returned.
#[derive(Debug, Error)]
pub enum Error {
    /// A command, option or argument definition was malformed in some way
    /// (e.g. an empty name, or a required argument after an optional one).
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// A reader failed to convert a raw command-line string into a value.
    #[error("Conversion failed: {0}")]
    Conversion(String),
    /// A command's action reported a failure.
    #[error("{0}")]
    Action(String),
    /// `run` was called on a command type which doesn't implement it.
    #[error("run is not implemented for this command")]
    NotImplemented,
    /// An I/O error, generally encountered when writing to an `Output`.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// A Result type which uses optics' internal Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// UsageError describes a mistake in the command-line tokens given by the
/// user. These are never returned as an `Err`; instead, the message is written
/// to the error channel of the `Output` the command was run with.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum UsageError {
    /// An option which the command doesn't define. The string is the option
    /// as it was spelled, including its leading dash(es).
    #[error("error: unknown option `{0}'")]
    UnknownOption(String),
    /// The tokens ended while an option was still waiting for its value.
    #[error("error: missing argument for `{0}'")]
    MissingOptionArgument(String),
    /// Some required positional argument was not given.
    #[error("error: too few argument")]
    TooFewArguments,
    /// A command group was run without any tokens and has no default.
    #[error("error: missing subcommand name")]
    MissingSubcommand,
    /// A command group was given a name it doesn't know and has no default.
    #[error("error: unknown subcommand name `{0}'")]
    UnknownSubcommand(String),
}

impl UsageError {
    /// Returns the full, newline-terminated message which is written to the
    /// error channel of an `Output`.
    pub fn message(&self) -> String {
        format!("{}\n", self)
    }
}
