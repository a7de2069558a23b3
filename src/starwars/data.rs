// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use tokio::sync::RwLock;

/// Id of the rebel alliance faction.
pub const REBELS_ID: &str = "1";

/// Id of the galactic empire faction.
pub const EMPIRE_ID: &str = "2";

/// A ship.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ship {
    /// Local id of the ship.
    pub id: String,

    /// Name of the ship.
    pub name: String,
}

/// A faction and the ids of its ships, in the order they joined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faction {
    /// Local id of the faction.
    pub id: String,

    /// Name of the faction.
    pub name: String,

    /// Local ids of all ships of this faction.
    pub ships: Vec<String>,
}

/// Storage of ships and factions.
#[async_trait]
pub trait StarWarsRepository: Send + Sync {
    /// Returns the ship with the given id.
    async fn ship(&self, id: &str) -> Option<Ship>;

    /// Returns the faction with the given id.
    async fn faction(&self, id: &str) -> Option<Faction>;

    /// Creates a new ship and adds it to the faction if it exists.
    async fn create_ship(&self, ship_name: &str, faction_id: &str) -> Ship;
}

#[derive(Debug)]
struct Data {
    ships: HashMap<String, Ship>,
    factions: HashMap<String, Faction>,
    next_ship_id: u64,
}

/// In-memory repository, seeded with the rebel and empire fleets.
#[derive(Debug)]
pub struct MemoryStarWarsRepository {
    data: RwLock<Data>,
}

impl MemoryStarWarsRepository {
    /// Returns a repository holding the default data set.
    pub fn new() -> Self {
        let ships: HashMap<String, Ship> = [
            ("1", "X-Wing"),
            ("2", "Y-Wing"),
            ("3", "A-Wing"),
            ("4", "Millenium Falcon"),
            ("5", "Home One"),
            ("6", "TIE Fighter"),
            ("7", "TIE Interceptor"),
            ("8", "Executor"),
        ]
        .iter()
        .map(|(id, name)| {
            let ship = Ship {
                id: id.to_string(),
                name: name.to_string(),
            };
            (ship.id.clone(), ship)
        })
        .collect();

        let factions: HashMap<String, Faction> = vec![
            Faction {
                id: REBELS_ID.to_string(),
                name: "Alliance to Restore the Republic".to_string(),
                ships: vec!["1", "2", "3", "4", "5"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            Faction {
                id: EMPIRE_ID.to_string(),
                name: "Galactic Empire".to_string(),
                ships: vec!["6", "7", "8"].into_iter().map(String::from).collect(),
            },
        ]
        .into_iter()
        .map(|faction| (faction.id.clone(), faction))
        .collect();

        let next_ship_id = ships.len() as u64 + 1;

        Self {
            data: RwLock::new(Data {
                ships,
                factions,
                next_ship_id,
            }),
        }
    }
}

impl Default for MemoryStarWarsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StarWarsRepository for MemoryStarWarsRepository {
    async fn ship(&self, id: &str) -> Option<Ship> {
        self.data.read().await.ships.get(id).cloned()
    }

    async fn faction(&self, id: &str) -> Option<Faction> {
        self.data.read().await.factions.get(id).cloned()
    }

    async fn create_ship(&self, ship_name: &str, faction_id: &str) -> Ship {
        let mut data = self.data.write().await;

        let ship = Ship {
            id: data.next_ship_id.to_string(),
            name: ship_name.to_owned(),
        };
        data.next_ship_id += 1;
        data.ships.insert(ship.id.clone(), ship.clone());

        match data.factions.get_mut(faction_id) {
            Some(faction) => {
                debug!("Created ship {} for faction {}", ship.id, faction_id);
                faction.ships.push(ship.id.clone());
            }
            None => debug!("Created ship {} without faction", ship.id),
        }

        ship
    }
}
