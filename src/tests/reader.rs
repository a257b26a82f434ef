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
use crate::reader::*;
use crate::value::Value;

fn assert_conversion_error(r: Result<Value>) {
    match r {
        Err(Error::Conversion(_)) => {}
        r => panic!("expected a conversion error, got {:?}", r),
    }
}

#[test]
fn test_string() {
    crate::tests::init();
    assert_eq!(Value::from("foo bar"), string("foo bar").unwrap());
    assert_eq!(Value::from(""), string("").unwrap());
}

#[test]
fn test_integer() {
    crate::tests::init();
    assert_eq!(Value::Integer(42), integer("42").unwrap());
    assert_eq!(Value::Integer(-7), integer("-7").unwrap());
    assert_conversion_error(integer(""));
    assert_conversion_error(integer("4.2"));
    assert_conversion_error(integer("nyan"));
}

#[test]
fn test_float() {
    crate::tests::init();
    assert_eq!(Value::Float(1.5), float("1.5").unwrap());
    assert_eq!(Value::Float(3.0), float("3").unwrap());
    assert_conversion_error(float("one"));
}

#[test]
fn test_boolean() {
    crate::tests::init();
    for raw in &["true", "TRUE", "yes", "1"] {
        assert_eq!(Value::Boolean(true), boolean(raw).unwrap(), "{}", raw);
    }
    for raw in &["false", "No", "0"] {
        assert_eq!(Value::Boolean(false), boolean(raw).unwrap(), "{}", raw);
    }
    assert_conversion_error(boolean("maybe"));
}

#[test]
fn test_last_ignores_accumulator() {
    crate::tests::init();
    let reader = last(integer);
    assert_eq!(
        Value::Integer(2),
        reader("2", Some(&Value::Integer(1))).unwrap()
    );
    assert_conversion_error(reader("x", None));
}

#[test]
fn test_sum_integer() {
    crate::tests::init();
    assert_eq!(Value::Integer(3), sum_integer("3", None).unwrap());
    assert_eq!(
        Value::Integer(5),
        sum_integer("3", Some(&Value::Integer(2))).unwrap()
    );
    assert_conversion_error(sum_integer("x", Some(&Value::Integer(2))));
    assert_conversion_error(sum_integer("3", Some(&Value::from("2"))));
}

#[test]
fn test_sum_integer_overflow() {
    crate::tests::init();
    let max = Value::Integer(::std::i64::MAX);
    assert_conversion_error(sum_integer("1", Some(&max)));
    assert_eq!(max, sum_integer("0", Some(&max)).unwrap());
    assert_conversion_error(sum_integer("-1", Some(&Value::Integer(::std::i64::MIN))));
}

#[test]
fn test_append() {
    crate::tests::init();
    let reader = append(string);
    let first = reader("a", None).unwrap();
    assert_eq!(Value::List(vec![Value::from("a")]), first);
    let second = reader("b", Some(&first)).unwrap();
    assert_eq!(
        Value::List(vec![Value::from("a"), Value::from("b")]),
        second
    );

    // A non-list accumulator (e.g. a default value) becomes the first item.
    assert_eq!(
        Value::List(vec![Value::from("default"), Value::from("c")]),
        reader("c", Some(&Value::from("default"))).unwrap()
    );
}
