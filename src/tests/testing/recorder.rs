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


use crate::testing::recorder::*;
use crate::tests::values;
use crate::value::{Value, Values};

#[test]
fn test_action_recorder() {
    crate::tests::init();

    let recorder = ActionRecorder::new();
    assert_eq!(0, recorder.get_call_count());
    assert_eq!(None, recorder.get_last_call());

    let action = recorder.action();
    action(Values::new(), Values::new()).unwrap();
    action(
        values(vec![("a", Value::Integer(1))]),
        values(vec![("b", Value::Boolean(true))]),
    )
    .unwrap();

    assert_eq!(2, recorder.get_call_count());
    assert_eq!(
        Some((
            values(vec![("a", Value::Integer(1))]),
            values(vec![("b", Value::Boolean(true))])
        )),
        recorder.get_last_call()
    );
}
