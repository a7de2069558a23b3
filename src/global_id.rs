// SPDX-License-Identifier: AGPL-3.0-or-later

//! Opaque ids which are unique among all types of a GraphQL API.
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::encoding;
use crate::errors::GlobalIdError;

/// Separates the type name from the local id before encoding.
const SEPARATOR: char = ':';

/// Type name and type-scoped id recovered from a global id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedGlobalId {
    /// Name of the type the object belongs to.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Id of the object, only unique for its type.
    pub id: String,
}

impl ResolvedGlobalId {
    /// Encodes this pair into a global id again.
    pub fn to_global_id(&self) -> String {
        to_global_id(&self.type_name, &self.id)
    }
}

impl Display for ResolvedGlobalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.type_name, SEPARATOR, self.id)
    }
}

/// Takes a type name and an id specific to that type and returns a global id.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    encoding::encode(&format!("{}{}{}", type_name, SEPARATOR, id))
}

/// Takes a global id created by [`to_global_id`] and returns the type name and id used to
/// create it.
///
/// Everything after the first separator belongs to the local id, which therefore may contain
/// the separator itself. Type names can not.
pub fn from_global_id(global_id: &str) -> Result<ResolvedGlobalId, GlobalIdError> {
    let decoded = encoding::decode(global_id).unwrap_or_default();

    match decoded.split_once(SEPARATOR) {
        Some((type_name, id)) => Ok(ResolvedGlobalId {
            type_name: type_name.to_owned(),
            id: id.to_owned(),
        }),
        None => Err(GlobalIdError::InvalidGlobalId(global_id.to_owned())),
    }
}
