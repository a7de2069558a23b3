// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reference GraphQL schema over a small data set of star wars ships and factions.
//!
//! It shows how list fields, the `node` root field and plural identifying root fields are wired
//! up and is backed by an injectable repository rather than global state.
mod data;
mod schema;
#[cfg(test)]
mod tests;

pub use data::{
    Faction, MemoryStarWarsRepository, Ship, StarWarsRepository, EMPIRE_ID, REBELS_ID,
};
pub use schema::{
    build_schema, IntroduceShipInput, IntroduceShipPayload, MutationRoot, Node, QueryRoot,
    StarWarsSchema,
};
