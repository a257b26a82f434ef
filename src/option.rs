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

use crate::command::Command;
use crate::error::*;
use crate::output::Output;
use crate::value::Value;
use std::fmt;

/// The caller-provided function which converts an option's raw value into a
/// Value. The second parameter is the value accumulated so far for the same
/// option (None the first time it appears), which lets repeated occurrences
/// be folded together.
pub type OptionReader<'a> = Box<dyn Fn(&str, Option<&Value>) -> Result<Value> + 'a>;

/// The action attached to a special option. It receives the command being
/// parsed, the invocation name, the output, and the option's resolved value.
/// Returning `true` interrupts parsing: no further tokens are processed and
/// the command's own action is not called.
pub type SpecialAction<'a> =
    Box<dyn Fn(&Command<'a>, &str, &mut dyn Output, &Value) -> Result<bool> + 'a>;

/// OptionArgument describes the value an option accepts. Options which don't
/// accept any value (boolean flags) simply have no OptionArgument.
pub enum OptionArgument<'a> {
    /// The option must be given a value, either inline (`-nVALUE`,
    /// `--name=VALUE`) or as the following token.
    Required {
        name: String,
        reader: OptionReader<'a>,
    },
    /// The option may be given an inline value; if it isn't, the default is
    /// used and no following token is consumed.
    Optional {
        name: String,
        default_value: Value,
        reader: OptionReader<'a>,
    },
}

fn check_placeholder(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Configuration(
            "option argument names must not be empty".to_owned(),
        ));
    }
    Ok(())
}

impl<'a> OptionArgument<'a> {
    pub fn required<F>(name: &str, reader: F) -> Result<OptionArgument<'a>>
    where
        F: Fn(&str, Option<&Value>) -> Result<Value> + 'a,
    {
        check_placeholder(name)?;
        Ok(OptionArgument::Required {
            name: name.to_owned(),
            reader: Box::new(reader),
        })
    }

    pub fn optional<V, F>(name: &str, default_value: V, reader: F) -> Result<OptionArgument<'a>>
    where
        V: Into<Value>,
        F: Fn(&str, Option<&Value>) -> Result<Value> + 'a,
    {
        check_placeholder(name)?;
        Ok(OptionArgument::Optional {
            name: name.to_owned(),
            default_value: default_value.into(),
            reader: Box::new(reader),
        })
    }

    pub fn get_name(&self) -> &str {
        match *self {
            OptionArgument::Required { ref name, .. } => name.as_str(),
            OptionArgument::Optional { ref name, .. } => name.as_str(),
        }
    }

    pub fn is_required(&self) -> bool {
        match *self {
            OptionArgument::Required { .. } => true,
            OptionArgument::Optional { .. } => false,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match *self {
            OptionArgument::Required { .. } => None,
            OptionArgument::Optional {
                ref default_value, ..
            } => Some(default_value),
        }
    }

    /// The placeholder shown after a short name in usage text: `name`, or
    /// `[name]` if the value is optional.
    pub fn short_placeholder(&self) -> String {
        match *self {
            OptionArgument::Required { ref name, .. } => name.clone(),
            OptionArgument::Optional { ref name, .. } => format!("[{}]", name),
        }
    }

    /// The placeholder shown after a long name in usage text: `=name`, or
    /// `[=name]` if the value is optional.
    pub fn long_placeholder(&self) -> String {
        match *self {
            OptionArgument::Required { ref name, .. } => format!("={}", name),
            OptionArgument::Optional { ref name, .. } => format!("[={}]", name),
        }
    }

    /// Converts a raw value using this argument's reader, threading through
    /// the previously accumulated value for the option.
    pub fn read(&self, raw: &str, accumulator: Option<&Value>) -> Result<Value> {
        match *self {
            OptionArgument::Required { ref reader, .. } => reader(raw, accumulator),
            OptionArgument::Optional { ref reader, .. } => reader(raw, accumulator),
        }
    }
}

impl<'a> fmt::Debug for OptionArgument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionArgument")
            .field("name", &self.get_name())
            .field("default_value", &self.default_value())
            .finish()
    }
}

/// An OptionSpec describes a named, non-positional parameter to a command. It
/// can be referred to by its short name (`-x`), its long name (`--name`), or
/// both. Parsed values are stored under the option's normalized key: the long
/// name if there is one, otherwise the short name.
///
/// A *special* option (see `OptionSpec::special`) additionally carries an
/// action which is invoked as soon as the option is parsed, and which can
/// interrupt parsing entirely (the classic example is `--help`).
pub struct OptionSpec<'a> {
    short_name: Option<char>,
    long_name: Option<String>,
    arg: Option<OptionArgument<'a>>,
    description: String,
    action: Option<SpecialAction<'a>>,
}

impl<'a> OptionSpec<'a> {
    /// Constructs a normal option. `arg` is None for boolean flags.
    ///
    /// At least one of `short_name` and `long_name` must be given. The short
    /// name may not be `-`, and the long name must be non-empty, may not start
    /// with `-`, and may not contain `=`, since such names could never be
    /// matched on the command line.
    pub fn new(
        short_name: Option<char>,
        long_name: Option<&str>,
        arg: Option<OptionArgument<'a>>,
        description: &str,
    ) -> Result<OptionSpec<'a>> {
        if short_name.is_none() && long_name.is_none() {
            return Err(Error::Configuration(
                "options must have a short name, a long name, or both".to_owned(),
            ));
        }
        if short_name == Some('-') {
            return Err(Error::Configuration(
                "'-' is not a valid short option name".to_owned(),
            ));
        }
        if let Some(long_name) = long_name {
            if long_name.is_empty() {
                return Err(Error::Configuration(
                    "long option names must not be empty".to_owned(),
                ));
            }
            if long_name.starts_with('-') || long_name.contains('=') {
                return Err(Error::Configuration(format!(
                    "invalid long option name '{}'",
                    long_name
                )));
            }
        }

        Ok(OptionSpec {
            short_name: short_name,
            long_name: long_name.map(|n| n.to_owned()),
            arg: arg,
            description: description.to_owned(),
            action: None,
        })
    }

    /// Constructs a special option, whose action is invoked with the resolved
    /// value every time the option is parsed. If the action returns `true`,
    /// parsing stops immediately.
    pub fn special<F>(
        short_name: Option<char>,
        long_name: Option<&str>,
        arg: Option<OptionArgument<'a>>,
        description: &str,
        action: F,
    ) -> Result<OptionSpec<'a>>
    where
        F: Fn(&Command<'a>, &str, &mut dyn Output, &Value) -> Result<bool> + 'a,
    {
        let mut spec = OptionSpec::new(short_name, long_name, arg, description)?;
        spec.action = Some(Box::new(action));
        Ok(spec)
    }

    pub fn get_short_name(&self) -> Option<char> {
        self.short_name
    }

    pub fn get_long_name(&self) -> Option<&str> {
        self.long_name.as_ref().map(|n| n.as_str())
    }

    pub fn get_arg(&self) -> Option<&OptionArgument<'a>> {
        self.arg.as_ref()
    }

    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the key this option's value is stored under: the long name if
    /// present, otherwise the short name.
    pub fn key(&self) -> String {
        match (self.long_name.as_ref(), self.short_name) {
            (Some(long_name), _) => long_name.clone(),
            (None, Some(short_name)) => short_name.to_string(),
            (None, None) => unreachable!(),
        }
    }

    pub fn is_special(&self) -> bool {
        self.action.is_some()
    }

    /// Calls this option's special action, returning whether or not parsing
    /// should be interrupted. Normal options never interrupt.
    pub fn invoke(
        &self,
        command: &Command<'a>,
        name: &str,
        out: &mut dyn Output,
        value: &Value,
    ) -> Result<bool> {
        match self.action {
            None => Ok(false),
            Some(ref action) => action(command, name, out, value),
        }
    }
}

impl<'a> fmt::Debug for OptionSpec<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("short_name", &self.short_name)
            .field("long_name", &self.long_name)
            .field("arg", &self.arg)
            .field("description", &self.description)
            .field("special", &self.is_special())
            .finish()
    }
}
