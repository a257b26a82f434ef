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

use crate::testing::logging::set_test_logger;
use crate::value::{Value, Values};

mod help;
mod reader;
mod testing;

/// Every test calls this first, so parser traces are shown for failures.
pub(crate) fn init() {
    set_test_logger(None);
}

pub(crate) fn tokens(ts: &[&str]) -> Vec<String> {
    ts.iter().map(|&t| t.to_owned()).collect()
}

pub(crate) fn values(vs: Vec<(&str, Value)>) -> Values {
    vs.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
}
