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

#![deny(
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unused_qualifications)]

//! optics is a library for declarative command-line parsing. A caller
//! describes a `Command` (its positional `Argument`s, its `OptionSpec`s, and an
//! action), or a `CommandGroup` of named subcommands, and the library turns a
//! list of raw tokens into parsed argument and option `Values` before calling
//! the action.

/// argument defines positional arguments.
pub mod argument;
/// command defines single commands, and the parser which runs them.
pub mod command;
/// error defines the errors returned to callers, and the usage errors
/// reported to users.
pub mod error;
/// group defines commands which dispatch to named subcommands.
pub mod group;
/// help renders usage text for commands and groups.
pub mod help;
/// main_impl provides an entrypoint for binaries built on this library.
pub mod main_impl;
/// option defines named options, including special (interrupting) options.
pub mod option;
/// output defines where commands write messages for the user.
pub mod output;
/// reader provides ready-made readers for common value types.
pub mod reader;
/// testing provides utilities which are useful for unit testing commands.
#[cfg(feature = "testing")]
pub mod testing;
pub mod value;

// Tests rely on the helpers in the testing module.
#[cfg(feature = "testing")]
#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use self::argument::Argument;
pub use self::command::{Command, CommandBase, Outcome, Parsed};
pub use self::error::{Error, Result, UsageError};
pub use self::group::{CommandGroup, Subcommand};
pub use self::help::{help_option, version_option};
pub use self::main_impl::main_impl;
pub use self::option::{OptionArgument, OptionSpec};
pub use self::output::{LogOutput, NullOutput, Output, StdOutput};
pub use self::value::{Value, Values};
