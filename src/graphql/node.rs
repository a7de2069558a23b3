// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::{Result, ID};
use async_trait::async_trait;
use log::debug;

use crate::global_id::{from_global_id, to_global_id, ResolvedGlobalId};

/// Fetches an object by the type name and local id encoded in its global id.
///
/// This is the backend of a root `node(id: ID!)` field, implementations usually dispatch on the
/// type name and return a GraphQL interface or union value.
#[async_trait]
pub trait IdFetcher: Send + Sync {
    /// Object returned by this fetcher.
    type Item: Send;

    /// Returns the object with the given id or `None` if it does not exist.
    async fn fetch(&self, id: &ResolvedGlobalId) -> Result<Option<Self::Item>>;
}

/// Object which is addressable by a global id.
pub trait Identifiable {
    /// Name of the GraphQL type, used as the first part of the global id.
    const TYPE_NAME: &'static str;

    /// Id of this object, unique among all objects of the same type.
    fn local_id(&self) -> String;

    /// Global id of this object.
    fn global_id(&self) -> ID {
        global_id_field(Self::TYPE_NAME, &self.local_id())
    }
}

/// Returns the value of an `id: ID!` field for an object of the given type.
pub fn global_id_field(type_name: &str, id: &str) -> ID {
    ID::from(to_global_id(type_name, id))
}

/// Resolves a root `node(id: ID!)` field.
///
/// Ids which can not be decoded are handled like unknown ids and resolve to `None`.
pub async fn resolve_node<F: IdFetcher>(fetcher: &F, id: &ID) -> Result<Option<F::Item>> {
    match from_global_id(id.as_str()) {
        Ok(resolved) => {
            debug!("Fetch node {}", resolved);
            fetcher.fetch(&resolved).await
        }
        Err(err) => {
            debug!("{}, resolving node to null", err);
            Ok(None)
        }
    }
}
