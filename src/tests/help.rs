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

use super::tokens;
use crate::argument::Argument;
use crate::command::{Command, CommandBase, Outcome};
use crate::group::{CommandGroup, Subcommand};
use crate::help::*;
use crate::option::{OptionArgument, OptionSpec};
use crate::reader;
use crate::testing::output::RecordingOutput;
use crate::testing::recorder::ActionRecorder;

fn row(cells: &[&str]) -> HelpLine {
    HelpLine::Row(cells.iter().map(|&c| c.to_owned()).collect())
}

fn text(t: &str) -> HelpLine {
    HelpLine::Text(t.to_owned())
}

#[test]
fn test_format_help_text_empty() {
    crate::tests::init();
    assert_eq!("", format_help_text(0, &[]));
    assert_eq!("", format_help_text(4, &[]));
}

#[test]
fn test_format_help_text_text_lines() {
    crate::tests::init();
    assert_eq!("foo\n", format_help_text(0, &[text("foo")]));
    assert_eq!("  foo\n  bar\n", format_help_text(2, &[text("foo"), text("bar")]));
    // Lines are trimmed, so blank lines carry no indentation.
    assert_eq!("  foo\n\n", format_help_text(2, &[text("  foo  "), text("")]));
}

#[test]
fn test_format_help_text_rows_are_aligned() {
    crate::tests::init();
    assert_eq!(
        "foo  bar\n",
        format_help_text(0, &[row(&["foo", "bar"])])
    );
    assert_eq!(
        "foo        bar\nfoobarbaz  qux\n",
        format_help_text(0, &[row(&["foo", "bar"]), row(&["foobarbaz", "qux"])])
    );
    assert_eq!(
        "  a    b  c\n  aaa  b\n",
        format_help_text(2, &[row(&["a", "b", "c"]), row(&["aaa", "b"])])
    );
}

#[test]
fn test_format_help_text_mixed_lines() {
    crate::tests::init();
    // Text lines count towards the width of the first column.
    assert_eq!(
        "nyancat\nfoo      bar\n",
        format_help_text(0, &[text("nyancat"), row(&["foo", "bar"])])
    );
    assert_eq!(
        "nyancat  undefined\nfoobar\n",
        format_help_text(0, &[row(&["nyancat", "undefined"]), text("foobar")])
    );
}

#[test]
fn test_format_help_text_counts_characters() {
    crate::tests::init();
    assert_eq!(
        "ねこ   cat\nfoo  bar\n",
        format_help_text(0, &[row(&["ねこ", "cat"]), row(&["foo", "bar"])])
    );
}

fn build_help_command<'a>(recorder: &'a ActionRecorder) -> Command<'a> {
    Command::new(
        "test command",
        vec![
            Argument::required("foo", reader::string).unwrap(),
            Argument::optional("bar", "baz", reader::string).unwrap(),
        ],
        vec![
            OptionSpec::new(
                Some('t'),
                Some("test"),
                Some(OptionArgument::required("nyan", reader::last(reader::string)).unwrap()),
                "test option",
            )
            .unwrap(),
            OptionSpec::new(
                Some('c'),
                Some("cat"),
                Some(OptionArgument::optional("cat", "tama", reader::last(reader::string)).unwrap()),
                "specify a cat",
            )
            .unwrap(),
            OptionSpec::new(Some('v'), None, None, "verbose").unwrap(),
            OptionSpec::new(
                None,
                Some("long"),
                Some(OptionArgument::required("x", reader::last(reader::string)).unwrap()),
                "long only",
            )
            .unwrap(),
            OptionSpec::new(
                Some('n'),
                None,
                Some(OptionArgument::required("name", reader::last(reader::string)).unwrap()),
                "short only",
            )
            .unwrap(),
            OptionSpec::new(
                Some('o'),
                None,
                Some(OptionArgument::optional("out", "-", reader::last(reader::string)).unwrap()),
                "short optional",
            )
            .unwrap(),
        ],
        recorder.action(),
    )
    .unwrap()
}

#[test]
fn test_command_help_text() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    let command = build_help_command(&recorder);
    assert_eq!(
        "usage: test [options] <foo> [bar]\n\
         \n\
         \x20 test command\n\
         \n\
         options:\n\
         \x20 -t, --test=nyan  test option\n\
         \x20 -c, --cat[=cat]  specify a cat\n\
         \x20 -v               verbose\n\
         \x20 --long=x         long only\n\
         \x20 -n name          short only\n\
         \x20 -o [out]         short optional\n",
        command.help_text("test")
    );
}

#[test]
fn test_command_help_text_without_options() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    let command = Command::new(
        "",
        vec![Argument::required("file", reader::string).unwrap()],
        vec![],
        recorder.action(),
    )
    .unwrap();
    assert_eq!("usage: cmd <file>\n", command.help_text("cmd"));
}

#[test]
fn test_group_help_text() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    let group = CommandGroup::new(
        "do things",
        vec![
            Subcommand::new(
                "add",
                Command::new("add a thing", vec![], vec![], recorder.action()).unwrap(),
            )
            .unwrap(),
            Subcommand::new(
                "remove",
                Command::new("remove a thing", vec![], vec![], recorder.action()).unwrap(),
            )
            .unwrap(),
        ],
        None,
    );
    assert_eq!(
        "usage: app <command> [args ...]\n\
         \n\
         \x20 do things\n\
         \n\
         commands:\n\
         \x20 add     add a thing\n\
         \x20 remove  remove a thing\n",
        group.help_text("app")
    );

    let group = CommandGroup::new(
        "do things",
        vec![],
        Some(Box::new(
            Command::new("default", vec![], vec![], recorder.action()).unwrap(),
        )),
    );
    assert_eq!(
        "usage: app [command] [args ...]\n\n  do things\n",
        group.help_text("app")
    );
}

#[test]
fn test_help_option() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    let command = Command::new(
        "helpful",
        vec![Argument::required("foo", reader::string).unwrap()],
        vec![help_option().unwrap()],
        recorder.action(),
    )
    .unwrap();

    let mut out = RecordingOutput::new();
    assert_eq!(
        Outcome::Interrupted,
        command.run("prog sub", &mut out, &tokens(&["--help"])).unwrap()
    );
    assert_eq!(
        "usage: prog sub [options] <foo>\n\
         \n\
         \x20 helpful\n\
         \n\
         options:\n\
         \x20 -h, --help  show this help\n",
        out.get_output()
    );
    assert!(out.get_error_messages().is_empty());
    assert_eq!(0, recorder.get_call_count());
}

#[test]
fn test_version_option() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    let command = Command::new(
        "versioned",
        vec![],
        vec![version_option("1.2.3").unwrap()],
        recorder.action(),
    )
    .unwrap();

    for ts in &[vec!["-v"], vec!["--version", "--bogus"]] {
        let mut out = RecordingOutput::new();
        assert_eq!(
            Outcome::Interrupted,
            command.run("prog", &mut out, &tokens(ts)).unwrap()
        );
        assert_eq!("1.2.3\n", out.get_output());
    }
    assert_eq!(0, recorder.get_call_count());
}
