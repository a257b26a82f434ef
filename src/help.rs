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

use crate::command::{Command, CommandBase};
use crate::error::*;
use crate::group::CommandGroup;
use crate::option::OptionSpec;

/// A single line of help text: either freeform text, or a row of cells which
/// is aligned column-wise with the other rows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HelpLine {
    Text(String),
    Row(Vec<String>),
}

fn width(s: &str) -> usize {
    s.trim().chars().count()
}

fn align_left(s: &str, width: usize) -> String {
    let trimmed = s.trim();
    let padding = width.saturating_sub(trimmed.chars().count());
    format!("{}{}", trimmed, " ".repeat(padding))
}

/// Formats the given lines into column-aligned text. Each column is as wide as
/// its widest (trimmed) cell across all rows; plain text lines count towards
/// the width of the first column. Cells are separated by two spaces, every
/// line is prefixed with `indent_width` spaces, and trailing whitespace is
/// removed. Every line (including the last) ends with a newline.
pub fn format_help_text(indent_width: usize, lines: &[HelpLine]) -> String {
    let mut column_widths: Vec<usize> = Vec::new();
    for line in lines {
        let cells: Vec<&str> = match *line {
            HelpLine::Text(ref text) => vec![text.as_str()],
            HelpLine::Row(ref cells) => cells.iter().map(|c| c.as_str()).collect(),
        };
        for (idx, cell) in cells.into_iter().enumerate() {
            if idx >= column_widths.len() {
                column_widths.push(0);
            }
            column_widths[idx] = column_widths[idx].max(width(cell));
        }
    }

    let indent = " ".repeat(indent_width);
    let mut text = String::new();
    for line in lines {
        let formatted: String = match *line {
            HelpLine::Text(ref t) => t.trim().to_owned(),
            HelpLine::Row(ref cells) => cells
                .iter()
                .enumerate()
                .map(|(idx, cell)| align_left(cell, column_widths[idx]))
                .collect::<Vec<String>>()
                .join("  ")
                .trim()
                .to_owned(),
        };
        text.push_str(format!("{}{}", indent, formatted).trim_end());
        text.push('\n');
    }
    text
}

/// The names column for an option: e.g. `-t, --test=name`, `--test[=name]`
/// or `-t name`.
fn option_names(option: &OptionSpec<'_>) -> String {
    let mut names = String::new();
    if let Some(short_name) = option.get_short_name() {
        names.push('-');
        names.push(short_name);
        match option.get_long_name() {
            Some(_) => names.push_str(", "),
            None => {
                if let Some(arg) = option.get_arg() {
                    names.push(' ');
                    names.push_str(arg.short_placeholder().as_str());
                }
            }
        }
    }
    if let Some(long_name) = option.get_long_name() {
        names.push_str("--");
        names.push_str(long_name);
        if let Some(arg) = option.get_arg() {
            names.push_str(arg.long_placeholder().as_str());
        }
    }
    names
}

fn description_lines(description: &str) -> String {
    match description.trim().is_empty() {
        true => String::new(),
        false => format!(
            "\n{}",
            format_help_text(2, &[HelpLine::Text(description.to_owned())])
        ),
    }
}

pub(crate) fn command_help_text(name: &str, command: &Command<'_>) -> String {
    let mut usage = format!("usage: {}", name);
    if !command.get_options().is_empty() {
        usage.push_str(" [options]");
    }
    for argument in command.get_arguments() {
        usage.push(' ');
        usage.push_str(argument.placeholder().as_str());
    }

    let mut text = format!("{}\n", usage);
    text.push_str(description_lines(command.get_description()).as_str());

    if !command.get_options().is_empty() {
        let rows: Vec<HelpLine> = command
            .get_options()
            .iter()
            .map(|o| HelpLine::Row(vec![option_names(o), o.get_description().to_owned()]))
            .collect();
        text.push_str("\noptions:\n");
        text.push_str(format_help_text(2, &rows).as_str());
    }

    text
}

pub(crate) fn group_help_text(name: &str, group: &CommandGroup<'_>) -> String {
    let mut text = match group.get_default_command().is_some() {
        false => format!("usage: {} <command> [args ...]\n", name),
        true => format!("usage: {} [command] [args ...]\n", name),
    };
    text.push_str(description_lines(group.get_description()).as_str());

    if !group.get_subcommands().is_empty() {
        let rows: Vec<HelpLine> = group
            .get_subcommands()
            .iter()
            .map(|s| {
                HelpLine::Row(vec![
                    s.get_name().to_owned(),
                    s.get_command().get_description().to_owned(),
                ])
            })
            .collect();
        text.push_str("\ncommands:\n");
        text.push_str(format_help_text(2, &rows).as_str());
    }

    text
}

/// Returns a special `-h, --help` option, which writes the command's help text
/// to the normal output channel and interrupts parsing.
pub fn help_option<'a>() -> Result<OptionSpec<'a>> {
    OptionSpec::special(
        Some('h'),
        Some("help"),
        None,
        "show this help",
        |command, name, out, _| {
            out.write(command.help_text(name).as_str())?;
            Ok(true)
        },
    )
}

/// Returns a special `-v, --version` option, which writes the given version
/// string to the normal output channel and interrupts parsing.
pub fn version_option<'a>(version: &str) -> Result<OptionSpec<'a>> {
    let line = format!("{}\n", version);
    OptionSpec::special(
        Some('v'),
        Some("version"),
        None,
        "show the version",
        move |_, _, out, _| {
            out.write(line.as_str())?;
            Ok(true)
        },
    )
}
