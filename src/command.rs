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

use crate::argument::Argument;
use crate::error::*;
use crate::help;
use crate::option::{OptionArgument, OptionSpec};
use crate::output::Output;
use crate::value::{Value, Values};
use log::{debug, trace};
use std::collections::HashMap;
use std::fmt;

/// Outcome describes how a call to `CommandBase::run` ended, when it didn't
/// fail with an `Error`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The tokens were parsed successfully, and the command's action ran.
    Executed,
    /// A special option interrupted parsing; the action did not run.
    Interrupted,
    /// The tokens were invalid. A usage error was written to the output, and
    /// the action did not run.
    Rejected,
}

/// Parsed is the successful result of parsing a list of tokens against a
/// Command.
#[derive(Clone, Debug, PartialEq)]
pub enum Parsed {
    /// Every token was consumed. These are the values the action is called
    /// with.
    Complete { arguments: Values, options: Values },
    /// A special option's action asked for parsing to stop.
    Interrupted,
}

/// The user-facing half of a parse: either the tokens were acceptable, or
/// they contained a mistake which should be reported to the user.
pub type ParseResult = ::std::result::Result<Parsed, UsageError>;

/// The caller-provided action for a Command, called with the parsed argument
/// values and the parsed option values.
pub type CommandAction<'a> = Box<dyn Fn(Values, Values) -> Result<()> + 'a>;

/// CommandBase is the interface shared by everything which can be run against
/// a list of command-line tokens: single `Command`s, and `CommandGroup`s of
/// subcommands.
pub trait CommandBase {
    /// Returns the one-line description of this command.
    fn get_description(&self) -> &str;

    /// Returns usage information for this command, as it would be invoked by
    /// the given name.
    fn help_text(&self, name: &str) -> String {
        help::format_help_text(
            0,
            &[
                help::HelpLine::Text(format!("usage: {} [args ...]", name)),
                help::HelpLine::Text(self.get_description().to_owned()),
            ],
        )
    }

    /// Parse the given tokens and dispatch to the appropriate action. `name`
    /// is the name this command was invoked by, and is only used for display.
    ///
    /// Mistakes in the tokens are written to `out`'s error channel, and
    /// reported as `Outcome::Rejected`. Errors from readers, actions, or the
    /// output itself are returned.
    fn run(&self, _name: &str, _out: &mut dyn Output, _tokens: &[String]) -> Result<Outcome> {
        Err(Error::NotImplemented)
    }
}

/// A Command describes a single runnable command: its positional arguments,
/// its options, and the action to call with their values once the
/// command-line tokens have been parsed.
pub struct Command<'a> {
    description: String,
    arguments: Vec<Argument<'a>>,
    options: Vec<OptionSpec<'a>>,
    short_options: HashMap<char, usize>,
    long_options: HashMap<String, usize>,
    action: CommandAction<'a>,
}

impl<'a> Command<'a> {
    /// Constructs a new Command. Returns a configuration error if a required
    /// argument appears after an optional one.
    ///
    /// If more than one option uses the same short or long name, the first
    /// one wins.
    pub fn new<F>(
        description: &str,
        arguments: Vec<Argument<'a>>,
        options: Vec<OptionSpec<'a>>,
        action: F,
    ) -> Result<Command<'a>>
    where
        F: Fn(Values, Values) -> Result<()> + 'a,
    {
        // All arguments after the first optional one must also be optional.
        if !arguments
            .iter()
            .skip_while(|a| a.is_required())
            .all(|a| !a.is_required())
        {
            return Err(Error::Configuration(
                "required arguments must not follow optional arguments".to_owned(),
            ));
        }

        let mut short_options: HashMap<char, usize> = HashMap::new();
        let mut long_options: HashMap<String, usize> = HashMap::new();
        for (idx, option) in options.iter().enumerate() {
            if let Some(short_name) = option.get_short_name() {
                short_options.entry(short_name).or_insert(idx);
            }
            if let Some(long_name) = option.get_long_name() {
                long_options.entry(long_name.to_owned()).or_insert(idx);
            }
        }

        Ok(Command {
            description: description.to_owned(),
            arguments: arguments,
            options: options,
            short_options: short_options,
            long_options: long_options,
            action: Box::new(action),
        })
    }

    pub fn get_arguments(&self) -> &[Argument<'a>] {
        self.arguments.as_slice()
    }

    pub fn get_options(&self) -> &[OptionSpec<'a>] {
        self.options.as_slice()
    }

    /// Look up an option by its short name.
    pub fn find_short_option(&self, short_name: char) -> Option<&OptionSpec<'a>> {
        self.short_options
            .get(&short_name)
            .map(|&idx| &self.options[idx])
    }

    /// Look up an option by its long name.
    pub fn find_long_option(&self, long_name: &str) -> Option<&OptionSpec<'a>> {
        self.long_options
            .get(long_name)
            .map(|&idx| &self.options[idx])
    }

    /// Parse the given tokens in a single left-to-right pass, without calling
    /// this command's action. Special options' actions *are* invoked as they
    /// are encountered, which is why this needs an Output.
    ///
    /// The outer Result carries errors from readers, special actions and the
    /// output; the inner one carries mistakes made by the user.
    pub fn parse(&self, name: &str, out: &mut dyn Output, tokens: &[String]) -> Result<ParseResult> {
        let mut parser = Parser::new(self, name);
        for token in tokens {
            if let Some(halt) = parser.feed(out, token.as_str())? {
                return Ok(match halt {
                    Halt::Interrupted => {
                        debug!("{}: parsing interrupted by a special option", name);
                        Ok(Parsed::Interrupted)
                    }
                    Halt::Usage(e) => Err(e),
                });
            }
        }
        Ok(parser.finish())
    }

    /// Calls this command's action with the given values.
    pub fn execute(&self, arguments: Values, options: Values) -> Result<()> {
        (self.action)(arguments, options)
    }
}

impl<'a> CommandBase for Command<'a> {
    fn get_description(&self) -> &str {
        self.description.as_str()
    }

    fn help_text(&self, name: &str) -> String {
        help::command_help_text(name, self)
    }

    fn run(&self, name: &str, out: &mut dyn Output, tokens: &[String]) -> Result<Outcome> {
        match self.parse(name, out, tokens)? {
            Ok(Parsed::Complete { arguments, options }) => {
                self.execute(arguments, options)?;
                Ok(Outcome::Executed)
            }
            Ok(Parsed::Interrupted) => Ok(Outcome::Interrupted),
            Err(e) => reject(name, out, e),
        }
    }
}

impl<'a> fmt::Debug for Command<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("options", &self.options)
            .finish()
    }
}

/// Report a usage error to the user.
pub(crate) fn reject(name: &str, out: &mut dyn Output, e: UsageError) -> Result<Outcome> {
    debug!("{}: rejecting command-line: {}", name, e);
    out.write_error(e.message().as_str())?;
    Ok(Outcome::Rejected)
}

/// Splits a token of the form `-xREST` into `x` and `REST`. Tokens starting
/// with `--` are not short options.
fn split_short_option(token: &str) -> Option<(char, &str)> {
    if !token.starts_with('-') {
        return None;
    }
    let mut chars = token[1..].chars();
    match chars.next() {
        None | Some('-') => None,
        Some(c) => Some((c, chars.as_str())),
    }
}

/// Splits a token of the form `--name` or `--name=VALUE`. The name must be
/// non-empty and may not start with a dash.
fn split_long_option(token: &str) -> Option<(&str, Option<&str>)> {
    if !token.starts_with("--") {
        return None;
    }
    let trimmed = &token[2..];
    let (name, value) = match trimmed.find('=') {
        None => (trimmed, None),
        Some(idx) => (&trimmed[..idx], Some(&trimmed[idx + 1..])),
    };
    if name.is_empty() || name.starts_with('-') {
        return None;
    }
    Some((name, value))
}

/// Why a parse stopped before the end of the tokens.
enum Halt {
    Interrupted,
    Usage(UsageError),
}

/// An option which was given without an inline value, and which is waiting
/// for the next token to supply one.
struct Pending<'c, 'a> {
    option: &'c OptionSpec<'a>,
    arg: &'c OptionArgument<'a>,
    /// The spelling which triggered this, e.g. "-t" or "--test".
    display_name: String,
}

/// Parser holds the state for a single pass over a list of tokens. It is
/// created fresh for every parse, and never shared.
struct Parser<'c, 'a> {
    command: &'c Command<'a>,
    name: &'c str,
    arguments: Values,
    options: Values,
    argument_cursor: usize,
    pending: Option<Pending<'c, 'a>>,
}

impl<'c, 'a> Parser<'c, 'a> {
    fn new(command: &'c Command<'a>, name: &'c str) -> Self {
        Parser {
            command: command,
            name: name,
            arguments: Values::new(),
            options: Values::new(),
            argument_cursor: 0,
            pending: None,
        }
    }

    /// Process one token. Returns Some if parsing must stop here.
    fn feed(&mut self, out: &mut dyn Output, token: &str) -> Result<Option<Halt>> {
        if let Some(pending) = self.pending.take() {
            trace!("{}: '{}' is the value for {}", self.name, token, pending.display_name);
            let value = self.resolve(pending.option, pending.arg, token)?;
            return self.store(out, pending.option, value);
        }

        if let Some((short_name, rest)) = split_short_option(token) {
            trace!("{}: '{}' is a short option", self.name, token);
            return self.feed_short_options(out, short_name, rest);
        }

        if let Some((long_name, value)) = split_long_option(token) {
            trace!("{}: '{}' is a long option", self.name, token);
            return self.feed_long_option(out, long_name, value);
        }

        trace!("{}: '{}' is a positional argument", self.name, token);
        self.feed_argument(token)?;
        Ok(None)
    }

    /// Handle a cluster of short options like `-abc`, or a short option with
    /// an inline value like `-nVALUE`.
    fn feed_short_options(
        &mut self,
        out: &mut dyn Output,
        mut short_name: char,
        mut rest: &str,
    ) -> Result<Option<Halt>> {
        let command = self.command;
        loop {
            let display_name = format!("-{}", short_name);
            let option = match command.find_short_option(short_name) {
                None => return Ok(Some(Halt::Usage(UsageError::UnknownOption(display_name)))),
                Some(option) => option,
            };

            let arg = match option.get_arg() {
                Some(arg) => arg,
                None => {
                    if let Some(halt) = self.store(out, option, Value::Boolean(true))? {
                        return Ok(Some(halt));
                    }
                    // The remainder is another cluster of short options.
                    let mut chars = rest.chars();
                    match chars.next() {
                        None => return Ok(None),
                        Some(next) => {
                            short_name = next;
                            rest = chars.as_str();
                            continue;
                        }
                    }
                }
            };

            let inline_value = match rest.is_empty() {
                true => None,
                false => Some(rest),
            };
            return self.feed_option_value(out, option, arg, inline_value, display_name);
        }
    }

    fn feed_long_option(
        &mut self,
        out: &mut dyn Output,
        long_name: &str,
        value: Option<&str>,
    ) -> Result<Option<Halt>> {
        let command = self.command;
        let display_name = format!("--{}", long_name);
        let option = match command.find_long_option(long_name) {
            None => return Ok(Some(Halt::Usage(UsageError::UnknownOption(display_name)))),
            Some(option) => option,
        };

        match option.get_arg() {
            None => {
                if let Some(value) = value {
                    debug!(
                        "{}: ignoring value '{}' given to {}, which takes no argument",
                        self.name, value, display_name
                    );
                }
                self.store(out, option, Value::Boolean(true))
            }
            Some(arg) => self.feed_option_value(out, option, arg, value, display_name),
        }
    }

    /// Handle an option which accepts a value. An inline value is resolved
    /// right away. Otherwise an optional value falls back to its default, and
    /// a required one waits for the next token.
    fn feed_option_value(
        &mut self,
        out: &mut dyn Output,
        option: &'c OptionSpec<'a>,
        arg: &'c OptionArgument<'a>,
        inline_value: Option<&str>,
        display_name: String,
    ) -> Result<Option<Halt>> {
        let value = match inline_value {
            Some(raw) => self.resolve(option, arg, raw)?,
            None => match arg.default_value() {
                Some(default_value) => default_value.clone(),
                None => {
                    self.pending = Some(Pending {
                        option: option,
                        arg: arg,
                        display_name: display_name,
                    });
                    return Ok(None);
                }
            },
        };
        self.store(out, option, value)
    }

    fn feed_argument(&mut self, token: &str) -> Result<()> {
        let argument = match self.command.get_arguments().get(self.argument_cursor) {
            None => {
                debug!("{}: ignoring extra argument '{}'", self.name, token);
                return Ok(());
            }
            Some(argument) => argument,
        };
        let value = argument.read(token)?;
        self.arguments.insert(argument.get_name(), value);
        self.argument_cursor += 1;
        Ok(())
    }

    /// Run a raw value through the option's reader, along with whatever has
    /// been accumulated for the option so far.
    fn resolve(&self, option: &OptionSpec<'a>, arg: &OptionArgument<'a>, raw: &str) -> Result<Value> {
        arg.read(raw, self.options.get(option.key().as_str()))
    }

    /// Record an option's resolved value, invoking its special action first
    /// if it has one.
    fn store(
        &mut self,
        out: &mut dyn Output,
        option: &'c OptionSpec<'a>,
        value: Value,
    ) -> Result<Option<Halt>> {
        if option.invoke(self.command, self.name, out, &value)? {
            return Ok(Some(Halt::Interrupted));
        }
        self.options.insert(option.key(), value);
        Ok(None)
    }

    /// Checks the state left over after the last token, and fills in default
    /// values for any arguments which weren't given.
    fn finish(mut self) -> ParseResult {
        if let Some(pending) = self.pending.take() {
            return Err(UsageError::MissingOptionArgument(pending.display_name));
        }

        for argument in &self.command.get_arguments()[self.argument_cursor..] {
            match argument.default_value() {
                None => return Err(UsageError::TooFewArguments),
                Some(default_value) => {
                    self.arguments
                        .insert(argument.get_name(), default_value.clone());
                }
            }
        }

        Ok(Parsed::Complete {
            arguments: self.arguments,
            options: self.options,
        })
    }
}
