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

use crate::command::{CommandBase, Outcome};
use crate::error::*;
use crate::output::StdOutput;
use log::error;
use std::env;
use std::path::Path;
use std::process;

/// The integer which is returned from main() if the program exits successfully.
pub(crate) const EXIT_SUCCESS: i32 = 0;
/// The integer which is returned from main() if the program exits with any
/// error.
pub(crate) const EXIT_FAILURE: i32 = 1;

/// Returns the name this program was invoked by: the file name of the 0'th
/// parameter, without any leading directories.
pub(crate) fn get_program_name() -> String {
    env::args()
        .next()
        .as_ref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_owned())
}

/// Returns the current program's parameters (accessed essentialy via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the executable)
/// is omitted.
pub(crate) fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Maps the result of running a command to a process exit code. Usage errors
/// have already been reported to the user by the time we get here; any other
/// error is logged.
pub(crate) fn handle_result(r: Result<Outcome>) -> i32 {
    match r {
        Ok(Outcome::Executed) | Ok(Outcome::Interrupted) => EXIT_SUCCESS,
        Ok(Outcome::Rejected) => EXIT_FAILURE,
        Err(e) => {
            error!("Internal error: {}", e);
            EXIT_FAILURE
        }
    }
}

/// Runs the given command against this process' command-line parameters,
/// writing to stdout / stderr.
///
/// This function exits this process with an appropriate exit code. Like
/// `std::process::exit`, because this function never returns and it terminates
/// the process, no destructors on the current stack or any other thread's
/// stack will be run. The caller should ensure that this function is called
/// from the only thread, and that any destructors which need to be run are in
/// the stack of the command's action.
pub fn main_impl<C: CommandBase + ?Sized>(command: &C) -> ! {
    let mut out = StdOutput;
    process::exit(handle_result(command.run(
        get_program_name().as_str(),
        &mut out,
        &get_program_parameters(),
    )));
}
