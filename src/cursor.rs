// SPDX-License-Identifier: AGPL-3.0-or-later

//! Opaque list cursors derived from array offsets.
//!
//! A cursor is the base64 encoding of a namespace prefix followed by the decimal offset of an
//! item, for example `arrayconnection:2` which becomes `YXJyYXljb25uZWN0aW9uOjI=`. Cursors stay
//! valid as long as the prefix does not change, so it must never be altered between releases.
use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::errors::CursorError;

/// Namespace prefix of every array connection cursor.
pub const CURSOR_PREFIX: &str = "arrayconnection:";

/// Opaque position of an item inside a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListCursor(String);

impl ListCursor {
    /// Wraps an already encoded cursor string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the encoded cursor string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the cursor holds no value, which is treated like no cursor at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the offset this cursor points at.
    pub fn offset(&self) -> Result<i64, CursorError> {
        cursor_to_offset(self)
    }
}

impl Display for ListCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListCursor {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<String> for ListCursor {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ListCursor {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for ListCursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Creates the cursor for an offset.
pub fn offset_to_cursor(offset: i64) -> ListCursor {
    let value = format!("{}{}", CURSOR_PREFIX, offset);
    ListCursor(encoding::encode(&value))
}

/// Re-derives the offset from a cursor.
///
/// Every occurrence of the namespace prefix is removed before the remainder is parsed, so
/// cursors issued with a repeated prefix are accepted as well.
pub fn cursor_to_offset(cursor: &ListCursor) -> Result<i64, CursorError> {
    let decoded = encoding::decode(cursor.as_str()).unwrap_or_default();

    decoded
        .replace(CURSOR_PREFIX, "")
        .parse::<i64>()
        .map_err(|_| CursorError::InvalidCursor(cursor.to_string()))
}

/// Extracts the offset of a cursor, falling back to `default` when the cursor is missing, empty
/// or can not be decoded.
pub fn offset_with_default(cursor: Option<&ListCursor>, default: i64) -> i64 {
    match cursor {
        Some(cursor) if !cursor.is_empty() => cursor_to_offset(cursor).unwrap_or_else(|err| {
            debug!("{}, using default offset {}", err, default);
            default
        }),
        _ => default,
    }
}

/// Returns the cursor of the first item in `data` which matches the given predicate.
pub fn cursor_for_object_in_list_by<T, F>(data: &[T], predicate: F) -> Option<ListCursor>
where
    F: Fn(&T) -> bool,
{
    data.iter()
        .position(predicate)
        .map(|index| offset_to_cursor(index as i64))
}

/// Returns the cursor of `object` inside of `data`, `None` if it is not a member.
pub fn cursor_for_object_in_list<T: PartialEq>(data: &[T], object: &T) -> Option<ListCursor> {
    cursor_for_object_in_list_by(data, |item| item == object)
}
