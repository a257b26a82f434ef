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
use crate::value::Value;
use std::fmt;

/// The caller-provided function which converts a raw positional token into a
/// Value.
pub type ArgumentReader<'a> = Box<dyn Fn(&str) -> Result<Value> + 'a>;

/// Kind denotes whether a positional argument must be given, or may be
/// omitted in favor of a default value.
pub(crate) enum Kind {
    Required,
    Optional { default_value: Value },
}

/// An Argument is a positional parameter. Arguments are consumed in the order
/// they are declared on a Command. An optional argument has a default value,
/// which is used if the user doesn't specify it explicitly.
///
/// Once a Command declares an optional argument, every argument after it must
/// also be optional; `Command::new` enforces this.
pub struct Argument<'a> {
    name: String,
    kind: Kind,
    reader: ArgumentReader<'a>,
}

fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Configuration(
            "argument names must not be empty".to_owned(),
        ));
    }
    Ok(())
}

impl<'a> Argument<'a> {
    /// Constructs an argument which must be given on the command line.
    pub fn required<F>(name: &str, reader: F) -> Result<Argument<'a>>
    where
        F: Fn(&str) -> Result<Value> + 'a,
    {
        check_name(name)?;
        Ok(Argument {
            name: name.to_owned(),
            kind: Kind::Required,
            reader: Box::new(reader),
        })
    }

    /// Constructs an argument which, if omitted, takes the given default
    /// value. The default is stored as-is; it is not passed through the
    /// reader.
    pub fn optional<V, F>(name: &str, default_value: V, reader: F) -> Result<Argument<'a>>
    where
        V: Into<Value>,
        F: Fn(&str) -> Result<Value> + 'a,
    {
        check_name(name)?;
        Ok(Argument {
            name: name.to_owned(),
            kind: Kind::Optional {
                default_value: default_value.into(),
            },
            reader: Box::new(reader),
        })
    }

    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    pub fn is_required(&self) -> bool {
        match self.kind {
            Kind::Required => true,
            Kind::Optional { .. } => false,
        }
    }

    /// Returns the default value for an optional argument, or None for a
    /// required one.
    pub fn default_value(&self) -> Option<&Value> {
        match self.kind {
            Kind::Required => None,
            Kind::Optional { ref default_value } => Some(default_value),
        }
    }

    /// Returns how this argument is displayed in usage text: `<name>` if it is
    /// required, or `[name]` if it is optional.
    pub fn placeholder(&self) -> String {
        match self.kind {
            Kind::Required => format!("<{}>", self.name),
            Kind::Optional { .. } => format!("[{}]", self.name),
        }
    }

    /// Converts a raw token using this argument's reader. Reader failures are
    /// returned untouched.
    pub fn read(&self, raw: &str) -> Result<Value> {
        (self.reader)(raw)
    }
}

impl<'a> fmt::Debug for Argument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argument")
            .field("name", &self.name)
            .field("default_value", &self.default_value())
            .finish()
    }
}
