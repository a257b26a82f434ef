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

//! Ready-made readers for the most common kinds of values. Argument readers
//! have the shape `Fn(&str) -> Result<Value>`; option readers additionally
//! receive the previously accumulated value for the option (`None` the first
//! time it appears), so repeated occurrences can be folded together.

use crate::error::*;
use crate::value::Value;

/// Return the boolean interpretation of a string, or an error if the string
/// isn't recognized as a valid boolean value.
fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_ref() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(Error::Conversion(format!(
            "invalid boolean value '{}'",
            raw
        ))),
    }
}

fn parse_integer(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| Error::Conversion(format!("invalid integer value '{}': {}", raw, e)))
}

fn parse_float(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| Error::Conversion(format!("invalid number value '{}': {}", raw, e)))
}

/// Keeps the raw string as-is.
pub fn string(raw: &str) -> Result<Value> {
    Ok(Value::String(raw.to_owned()))
}

pub fn integer(raw: &str) -> Result<Value> {
    parse_integer(raw).map(Value::Integer)
}

pub fn float(raw: &str) -> Result<Value> {
    parse_float(raw).map(Value::Float)
}

/// Accepts "true", "yes", "1", "false", "no" and "0", case-insensitively.
pub fn boolean(raw: &str) -> Result<Value> {
    parse_bool(raw).map(Value::Boolean)
}

/// Adapts an argument reader into an option reader which ignores the
/// accumulator, so the last occurrence of the option wins.
pub fn last<F>(reader: F) -> impl Fn(&str, Option<&Value>) -> Result<Value>
where
    F: Fn(&str) -> Result<Value>,
{
    move |raw, _| reader(raw)
}

/// An option reader which parses integers and sums every occurrence.
pub fn sum_integer(raw: &str, accumulator: Option<&Value>) -> Result<Value> {
    let previous = match accumulator {
        None => 0,
        Some(v) => v.as_i64().ok_or_else(|| {
            Error::Conversion(format!("cannot add '{}' to non-integer value {:?}", raw, v))
        })?,
    };
    let next = parse_integer(raw)?;
    previous
        .checked_add(next)
        .map(Value::Integer)
        .ok_or_else(|| {
            Error::Conversion(format!(
                "sum of {} and {} is out of range",
                previous, next
            ))
        })
}

/// Adapts an argument reader into an option reader which collects every
/// occurrence, in command-line order, into a `Value::List`.
pub fn append<F>(reader: F) -> impl Fn(&str, Option<&Value>) -> Result<Value>
where
    F: Fn(&str) -> Result<Value>,
{
    move |raw, accumulator| {
        let mut values: Vec<Value> = match accumulator {
            None => Vec::new(),
            Some(Value::List(vs)) => vs.clone(),
            Some(v) => vec![v.clone()],
        };
        values.push(reader(raw)?);
        Ok(Value::List(values))
    }
}
