// SPDX-License-Identifier: AGPL-3.0-or-later

use thiserror::Error;

/// Errors returned when decoding list cursors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    /// Cursor is not valid base64, is missing an offset or the offset is not an integer.
    #[error("Invalid cursor '{0}'")]
    InvalidCursor(String),
}

/// Errors returned when decoding global ids.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlobalIdError {
    /// Global id could not be decoded into a type name and a local id.
    #[error("Invalid global id '{0}'")]
    InvalidGlobalId(String),
}

/// Validation errors for pagination arguments coming from the GraphQL API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentsError {
    /// `first` or `last` was given a negative number.
    #[error("Argument '{argument}' must be a non-negative integer, got {value}")]
    NegativeLimit {
        /// Name of the argument.
        argument: &'static str,

        /// Value which was passed in.
        value: i64,
    },

    /// `first` or `last` asked for more items than the configured maximum page size.
    #[error("Argument '{argument}' of {value} exceeds the maximum page size of {max}")]
    PageSizeExceeded {
        /// Name of the argument.
        argument: &'static str,

        /// Value which was passed in.
        value: usize,

        /// Configured maximum page size.
        max: usize,
    },
}
