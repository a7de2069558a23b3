// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, InputObject, Object, Result, Schema, SimpleObject, ID,
};
use async_trait::async_trait;
use log::debug;

use crate::config::Configuration;
use crate::cursor::ListCursor;
use crate::global_id::ResolvedGlobalId;
use crate::graphql::{
    list_arguments, resolve_node, resolve_plural, IdFetcher, Identifiable, ListObject,
};
use crate::list::list_from_array;
use crate::starwars::data::{Faction, Ship, StarWarsRepository, EMPIRE_ID, REBELS_ID};

pub use node::Node;

/// Schema of the star wars API.
pub type StarWarsSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Builds the schema, injecting the repository and page size configuration.
pub fn build_schema(
    repository: Arc<dyn StarWarsRepository>,
    config: Configuration,
) -> StarWarsSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repository)
        .data(config)
        .finish()
}

mod node {
    // The interface derive generates undocumented accessor methods next to the enum
    #![allow(missing_docs)]

    use async_graphql::{Interface, ID};

    use crate::starwars::data::{Faction, Ship};

    /// An object with an id.
    #[derive(Debug, Interface)]
    #[graphql(field(name = "id", type = "ID", desc = "The id of the object."))]
    pub enum Node {
        /// A ship.
        Ship(Ship),

        /// A faction.
        Faction(Faction),
    }
}

impl Identifiable for Ship {
    const TYPE_NAME: &'static str = "Ship";

    fn local_id(&self) -> String {
        self.id.clone()
    }
}

impl Identifiable for Faction {
    const TYPE_NAME: &'static str = "Faction";

    fn local_id(&self) -> String {
        self.id.clone()
    }
}

/// A ship in the star wars saga.
#[Object]
impl Ship {
    /// The id of the object.
    async fn id(&self) -> ID {
        self.global_id()
    }

    /// The name of the ship.
    async fn name(&self) -> &str {
        &self.name
    }
}

/// A faction in the star wars saga.
#[Object]
impl Faction {
    /// The id of the object.
    async fn id(&self) -> ID {
        self.global_id()
    }

    /// The name of the faction.
    async fn name(&self) -> &str {
        &self.name
    }

    /// The ships used by the faction.
    async fn ships(
        &self,
        ctx: &Context<'_>,
        before: Option<ListCursor>,
        after: Option<ListCursor>,
        first: Option<i32>,
        last: Option<i32>,
    ) -> Result<ListObject<Ship>> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;
        let config = ctx.data::<Configuration>()?;
        let args = list_arguments(config, before, after, first, last)?;

        let mut ships = Vec::with_capacity(self.ships.len());
        for id in &self.ships {
            if let Some(ship) = repository.ship(id).await {
                ships.push(ship);
            }
        }

        Ok(list_from_array(&ships, &args).into())
    }
}

/// Looks up ships and factions by their global id.
struct NodeFetcher<'a>(&'a dyn StarWarsRepository);

#[async_trait]
impl IdFetcher for NodeFetcher<'_> {
    type Item = Node;

    async fn fetch(&self, id: &ResolvedGlobalId) -> Result<Option<Node>> {
        let node = if id.type_name == Ship::TYPE_NAME {
            self.0.ship(&id.id).await.map(Node::Ship)
        } else if id.type_name == Faction::TYPE_NAME {
            self.0.faction(&id.id).await.map(Node::Faction)
        } else {
            None
        };

        Ok(node)
    }
}

/// Root of all queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The rebel alliance.
    async fn rebels(&self, ctx: &Context<'_>) -> Result<Option<Faction>> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;
        Ok(repository.faction(REBELS_ID).await)
    }

    /// The galactic empire.
    async fn empire(&self, ctx: &Context<'_>) -> Result<Option<Faction>> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;
        Ok(repository.faction(EMPIRE_ID).await)
    }

    /// Fetches an object given its id.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;
        resolve_node(&NodeFetcher(repository.as_ref()), &id).await
    }

    /// Fetches ships given their ids, in the same order.
    async fn ships(&self, ctx: &Context<'_>, ids: Vec<String>) -> Result<Vec<Option<Ship>>> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;

        let ships = resolve_plural(ids, |id| async move { repository.ship(&id).await }).await;

        Ok(ships)
    }
}

/// Data needed to introduce a new ship.
#[derive(Debug, InputObject)]
pub struct IntroduceShipInput {
    /// Name of the new ship.
    pub ship_name: String,

    /// Local id of the faction the ship belongs to.
    pub faction_id: String,
}

/// Result of introducing a ship.
#[derive(Debug, SimpleObject)]
pub struct IntroduceShipPayload {
    /// The new ship.
    pub ship: Ship,

    /// The faction after the ship was added, `None` if the faction does not exist.
    pub faction: Option<Faction>,
}

/// Root of all mutations.
#[derive(Debug, Default, Clone, Copy)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates a new ship and adds it to a faction.
    async fn introduce_ship(
        &self,
        ctx: &Context<'_>,
        input: IntroduceShipInput,
    ) -> Result<IntroduceShipPayload> {
        let repository = ctx.data::<Arc<dyn StarWarsRepository>>()?;
        debug!("Introduce ship {} to faction {}", input.ship_name, input.faction_id);

        let ship = repository
            .create_ship(&input.ship_name, &input.faction_id)
            .await;
        let faction = repository.faction(&input.faction_id).await;

        Ok(IntroduceShipPayload { ship, faction })
    }
}
