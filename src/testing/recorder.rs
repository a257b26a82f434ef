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
use crate::value::Values;
use std::sync::Mutex;

/// ActionRecorder stands in for a command's action in tests. It records each
/// call along with the argument and option values it was given. Because it
/// has internal synchronization, this can be done without retaining a mutable
/// reference.
pub struct ActionRecorder {
    calls: Mutex<Vec<(Values, Values)>>,
}

impl ActionRecorder {
    pub fn new() -> ActionRecorder {
        ActionRecorder {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Record that the action was called with the given values.
    pub fn record(&self, arguments: Values, options: Values) {
        self.calls.lock().unwrap().push((arguments, options));
    }

    /// Returns an action closure, suitable for `Command::new`, which records
    /// its calls into this recorder.
    pub fn action(&self) -> impl Fn(Values, Values) -> Result<()> + '_ {
        move |arguments, options| {
            self.record(arguments, options);
            Ok(())
        }
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the (arguments, options) of the most recent call, if any.
    pub fn get_last_call(&self) -> Option<(Values, Values)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for ActionRecorder {
    fn default() -> Self {
        ActionRecorder::new()
    }
}
