// SPDX-License-Identifier: AGPL-3.0-or-later

use std::convert::TryFrom;

use log::warn;

use crate::config::Configuration;
use crate::cursor::ListCursor;
use crate::errors::ArgumentsError;
use crate::list::ListArguments;

/// Name of the forward limit argument.
const FIRST_ARGUMENT: &str = "first";

/// Name of the backward limit argument.
const LAST_ARGUMENT: &str = "last";

/// Builds pagination arguments from the `before`, `after`, `first` and `last` arguments of a
/// GraphQL list field.
///
/// Limits have to be non-negative and may not exceed the configured maximum page size. When
/// neither `first` nor `last` was given the configured default page size is used as `first`.
pub fn list_arguments(
    config: &Configuration,
    before: Option<ListCursor>,
    after: Option<ListCursor>,
    first: Option<i32>,
    last: Option<i32>,
) -> Result<ListArguments, ArgumentsError> {
    let mut first = limit(config, FIRST_ARGUMENT, first)?;
    let last = limit(config, LAST_ARGUMENT, last)?;

    if first.is_none() && last.is_none() {
        first = config.default_page_size;
    }

    Ok(ListArguments {
        before,
        after,
        first,
        last,
    })
}

fn limit(
    config: &Configuration,
    argument: &'static str,
    value: Option<i32>,
) -> Result<Option<usize>, ArgumentsError> {
    let value = match value {
        Some(value) => value,
        None => return Ok(None),
    };

    let limit = usize::try_from(value).map_err(|_| {
        warn!("Rejected negative '{}' argument {}", argument, value);
        ArgumentsError::NegativeLimit {
            argument,
            value: value.into(),
        }
    })?;

    match config.max_page_size {
        Some(max) if limit > max => {
            warn!(
                "Rejected '{}' argument {} exceeding maximum page size {}",
                argument, limit, max
            );
            Err(ArgumentsError::PageSizeExceeded {
                argument,
                value: limit,
                max,
            })
        }
        _ => Ok(Some(limit)),
    }
}
