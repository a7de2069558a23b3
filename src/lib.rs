// SPDX-License-Identifier: AGPL-3.0-or-later

//! # connection-pagination
//!
//! Cursor based pagination over ordered collections, following the connection pattern of
//! GraphQL APIs, and opaque global ids addressing any object of an API.
//!
//! ```
//! use connection_pagination::{list_from_array, offset_to_cursor, ListArguments};
//!
//! let letters = vec!["A", "B", "C", "D", "E"];
//! let args = ListArguments::new().with_first(2).with_after(offset_to_cursor(1));
//!
//! let list = list_from_array(&letters, &args);
//! assert_eq!(list.items, vec!["C", "D"]);
//! assert!(list.page_info.has_next_page);
//! ```
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

mod config;
mod cursor;
mod encoding;
mod errors;
mod global_id;
pub mod graphql;
mod list;
#[cfg(all(test, feature = "proptests"))]
mod proptests;
#[cfg(any(test, feature = "starwars"))]
pub mod starwars;

pub use crate::config::Configuration;
pub use crate::cursor::{
    cursor_for_object_in_list, cursor_for_object_in_list_by, cursor_to_offset,
    offset_to_cursor, offset_with_default, ListCursor, CURSOR_PREFIX,
};
pub use crate::errors::{ArgumentsError, CursorError, GlobalIdError};
pub use crate::global_id::{from_global_id, to_global_id, ResolvedGlobalId};
pub use crate::list::{
    list_from_array, list_from_array_slice, ArraySliceMetaInfo, List, ListArguments, PageInfo,
};
