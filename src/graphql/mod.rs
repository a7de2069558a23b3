// SPDX-License-Identifier: AGPL-3.0-or-later

//! Helpers for exposing paginated lists and globally identified objects on an `async-graphql`
//! schema.
mod arguments;
mod cursor_scalar;
mod list_object;
mod node;
mod page_info;
mod plural;

pub use arguments::list_arguments;
pub use list_object::{DefaultListName, ListNameType, ListObject};
pub use node::{global_id_field, resolve_node, Identifiable, IdFetcher};
pub use plural::resolve_plural;
