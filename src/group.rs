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

use crate::command::{reject, CommandBase, Outcome};
use crate::error::*;
use crate::help;
use crate::output::Output;
use log::debug;
use std::fmt;

/// A Subcommand binds a name to a runnable command (which may itself be a
/// CommandGroup).
pub struct Subcommand<'a> {
    name: String,
    command: Box<dyn CommandBase + 'a>,
}

impl<'a> Subcommand<'a> {
    pub fn new<C: CommandBase + 'a>(name: &str, command: C) -> Result<Subcommand<'a>> {
        if name.is_empty() {
            return Err(Error::Configuration(
                "subcommand names must not be empty".to_owned(),
            ));
        }
        Ok(Subcommand {
            name: name.to_owned(),
            command: Box::new(command),
        })
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn get_command(&self) -> &dyn CommandBase {
        self.command.as_ref()
    }
}

impl<'a> fmt::Debug for Subcommand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subcommand")
            .field("name", &self.name)
            .field("description", &self.command.get_description())
            .finish()
    }
}

/// A CommandGroup dispatches to one of its subcommands, chosen by the first
/// command-line token. If there is no such token, or it doesn't name a
/// subcommand, the default command (if any) is run instead.
pub struct CommandGroup<'a> {
    description: String,
    subcommands: Vec<Subcommand<'a>>,
    default_command: Option<Box<dyn CommandBase + 'a>>,
}

impl<'a> CommandGroup<'a> {
    /// Constructs a new CommandGroup. If several subcommands share a name, the
    /// first one is always chosen.
    pub fn new(
        description: &str,
        subcommands: Vec<Subcommand<'a>>,
        default_command: Option<Box<dyn CommandBase + 'a>>,
    ) -> CommandGroup<'a> {
        CommandGroup {
            description: description.to_owned(),
            subcommands: subcommands,
            default_command: default_command,
        }
    }

    pub fn get_subcommands(&self) -> &[Subcommand<'a>] {
        self.subcommands.as_slice()
    }

    pub fn get_default_command(&self) -> Option<&dyn CommandBase> {
        self.default_command.as_deref()
    }

    pub fn find_subcommand(&self, name: &str) -> Option<&Subcommand<'a>> {
        self.subcommands.iter().find(|s| s.name == name)
    }
}

impl<'a> CommandBase for CommandGroup<'a> {
    fn get_description(&self) -> &str {
        self.description.as_str()
    }

    fn help_text(&self, name: &str) -> String {
        help::group_help_text(name, self)
    }

    fn run(&self, name: &str, out: &mut dyn Output, tokens: &[String]) -> Result<Outcome> {
        let (first, rest) = match tokens.split_first() {
            None => {
                return match self.default_command.as_ref() {
                    Some(default_command) => {
                        debug!("{}: no subcommand given, running the default", name);
                        default_command.run(name, out, tokens)
                    }
                    None => reject(name, out, UsageError::MissingSubcommand),
                };
            }
            Some(split) => split,
        };

        if let Some(subcommand) = self.find_subcommand(first.as_str()) {
            let subcommand_name = format!("{} {}", name, subcommand.name);
            debug!("{}: dispatching to '{}'", name, subcommand_name);
            return subcommand.command.run(subcommand_name.as_str(), out, rest);
        }

        match self.default_command.as_ref() {
            // The unrecognized token is left for the default command to
            // interpret.
            Some(default_command) => default_command.run(name, out, tokens),
            None => reject(name, out, UsageError::UnknownSubcommand(first.clone())),
        }
    }
}

impl<'a> fmt::Debug for CommandGroup<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandGroup")
            .field("description", &self.description)
            .field("subcommands", &self.subcommands)
            .field("has_default_command", &self.default_command.is_some())
            .finish()
    }
}
