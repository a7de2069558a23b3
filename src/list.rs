// SPDX-License-Identifier: AGPL-3.0-or-later

//! Windowing of ordered arrays following the GraphQL connection pattern.
//!
//! Cursors point at offsets inside of the logical array, pagination therefore only works as
//! expected when the array does not change between requests.
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::cursor::{offset_to_cursor, offset_with_default, ListCursor};

/// Pagination arguments of a list field.
///
/// `first` and `last` distinguish between "not set" (`None`) and zero. A limit of zero returns no
/// items but page info is still calculated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListArguments {
    /// Only return items strictly before this cursor.
    pub before: Option<ListCursor>,

    /// Only return items strictly after this cursor.
    pub after: Option<ListCursor>,

    /// Take at most this many items from the start of the eligible range.
    pub first: Option<usize>,

    /// Take at most this many items from the end of the eligible range.
    pub last: Option<usize>,
}

impl ListArguments {
    /// Returns arguments without any bounds or limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `before` cursor.
    pub fn with_before(mut self, cursor: impl Into<ListCursor>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Sets the `after` cursor.
    pub fn with_after(mut self, cursor: impl Into<ListCursor>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Sets the `first` limit.
    pub fn with_first(mut self, first: usize) -> Self {
        self.first = Some(first);
        self
    }

    /// Sets the `last` limit.
    pub fn with_last(mut self, last: usize) -> Self {
        self.last = Some(last);
        self
    }
}

/// Describes where a materialized slice is located inside of the full logical array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArraySliceMetaInfo {
    /// Offset of the first slice element inside of the array.
    pub slice_start: usize,

    /// Total length of the array.
    pub array_length: usize,
}

/// Information about pagination in a list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Cursor of the first returned item, `None` if no items were returned.
    pub start_cursor: Option<ListCursor>,

    /// Cursor of the last returned item, `None` if no items were returned.
    pub end_cursor: Option<ListCursor>,

    /// When paginating backwards, are there more items?
    pub has_previous_page: bool,

    /// When paginating forwards, are there more items?
    pub has_next_page: bool,
}

/// Window of items selected by pagination arguments together with its page info.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List<T> {
    /// Selected items, in the order of the array.
    pub items: Vec<T>,

    /// Information to aid in pagination.
    pub page_info: PageInfo,

    /// Number of items in the slice which was passed in.
    ///
    /// Note that this is not the length of the logical array when only a slice of it was
    /// materialized.
    pub total_count: usize,
}

impl<T> List<T> {
    /// Returns a list without any items.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            page_info: PageInfo::default(),
            total_count: 0,
        }
    }

    /// Returns true when no items were selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Converts every item while keeping page info and total count.
    pub fn map<U, F>(self, f: F) -> List<U>
    where
        F: FnMut(T) -> U,
    {
        List {
            items: self.items.into_iter().map(f).collect(),
            page_info: self.page_info,
            total_count: self.total_count,
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies pagination arguments to a whole array.
///
/// Offsets are used as cursors, pagination only works if the array is static.
pub fn list_from_array<T: Clone>(data: &[T], args: &ListArguments) -> List<T> {
    list_from_array_slice(
        data,
        args,
        ArraySliceMetaInfo {
            slice_start: 0,
            array_length: data.len(),
        },
    )
}

/// Applies pagination arguments to a slice of a larger array.
///
/// Use this when the length of the array is known but it is too large to materialize. The passed
/// slice has to be large enough to cover the range requested by `args`.
pub fn list_from_array_slice<T: Clone>(
    array_slice: &[T],
    args: &ListArguments,
    meta: ArraySliceMetaInfo,
) -> List<T> {
    let slice_length = to_offset(array_slice.len());
    let slice_start = to_offset(meta.slice_start);
    let array_length = to_offset(meta.array_length);
    let slice_end = slice_start.saturating_add(slice_length);

    let before = supplied(&args.before);
    let after = supplied(&args.after);

    let before_offset = offset_with_default(before, array_length);
    let after_offset = offset_with_default(after, -1);

    let mut start_offset = (slice_start - 1).max(after_offset).max(-1).saturating_add(1);
    let mut end_offset = slice_end.min(before_offset).min(array_length);

    if let Some(first) = args.first {
        end_offset = end_offset.min(start_offset.saturating_add(to_offset(first)));
    }

    if let Some(last) = args.last {
        start_offset = start_offset.max(end_offset.saturating_sub(to_offset(last)));
    }

    // Translate logical offsets into indexes of the passed slice
    let begin = start_offset.saturating_sub(slice_start).max(0);
    let end = slice_length.saturating_sub(slice_end.saturating_sub(end_offset));

    if begin > end {
        return List {
            total_count: array_slice.len(),
            ..List::new()
        };
    }

    // Both are inside of 0..=slice_length here
    let items = array_slice[begin as usize..end as usize].to_vec();

    let (start_cursor, end_cursor) = match items.len() {
        0 => (None, None),
        len => (
            Some(offset_to_cursor(start_offset)),
            Some(offset_to_cursor(start_offset + to_offset(len) - 1)),
        ),
    };

    let lower_bound = match after {
        Some(_) => after_offset.saturating_add(1),
        None => 0,
    };

    let upper_bound = match before {
        Some(_) => before_offset,
        None => array_length,
    };

    List {
        items,
        page_info: PageInfo {
            start_cursor,
            end_cursor,
            has_previous_page: args.last.is_some() && start_offset > lower_bound,
            has_next_page: args.first.is_some() && end_offset < upper_bound,
        },
        total_count: array_slice.len(),
    }
}

/// Empty cursor strings count as not supplied.
fn supplied(cursor: &Option<ListCursor>) -> Option<&ListCursor> {
    cursor.as_ref().filter(|cursor| !cursor.is_empty())
}

fn to_offset(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
