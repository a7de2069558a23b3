// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};

use crate::cursor::ListCursor;

/// Any string is accepted here, cursors which can not be decoded are ignored during pagination.
#[Scalar(name = "Cursor")]
impl ScalarType for ListCursor {
    fn parse(value: Value) -> InputValueResult<Self> {
        match value {
            Value::String(value) => Ok(ListCursor::new(value)),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}
