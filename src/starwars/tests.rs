// SPDX-License-Identifier: AGPL-3.0-or-later

//! End-to-end tests of list fields and object identification on the star wars schema.
use std::sync::Arc;

use async_graphql::{value, Response, Value};
use rstest::rstest;

use crate::config::Configuration;
use crate::starwars::{build_schema, MemoryStarWarsRepository, Node, Ship, StarWarsSchema};

fn schema() -> StarWarsSchema {
    build_schema(
        Arc::new(MemoryStarWarsRepository::new()),
        Configuration::default(),
    )
}

async fn execute(schema: &StarWarsSchema, query: &str) -> Response {
    let response = schema.execute(query).await;
    assert!(response.is_ok(), "{:#?}", response.errors);
    response
}

#[tokio::test]
async fn fetches_the_first_ship_of_the_rebels() {
    let query = r#"{
        rebels {
            name,
            ships(first: 1) {
                items {
                    name
                }
            }
        }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "name": "Alliance to Restore the Republic",
                "ships": {
                    "items": [
                        { "name": "X-Wing" }
                    ]
                }
            }
        })
    );
}

#[tokio::test]
async fn fetches_the_next_ships_with_a_cursor() {
    let schema = schema();

    let query = r#"{
        rebels {
            ships(first: 2) {
                items { name }
                pageInfo { endCursor, hasNextPage }
            }
        }
    }"#;

    let response = execute(&schema, query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "ships": {
                    "items": [
                        { "name": "X-Wing" },
                        { "name": "Y-Wing" }
                    ],
                    "pageInfo": {
                        "endCursor": "YXJyYXljb25uZWN0aW9uOjE=",
                        "hasNextPage": true
                    }
                }
            }
        })
    );

    let query = r#"{
        rebels {
            ships(first: 3, after: "YXJyYXljb25uZWN0aW9uOjE=") {
                items { name }
                pageInfo { startCursor, endCursor, hasNextPage }
            }
        }
    }"#;

    let response = execute(&schema, query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "ships": {
                    "items": [
                        { "name": "A-Wing" },
                        { "name": "Millenium Falcon" },
                        { "name": "Home One" }
                    ],
                    "pageInfo": {
                        "startCursor": "YXJyYXljb25uZWN0aW9uOjI=",
                        "endCursor": "YXJyYXljb25uZWN0aW9uOjQ=",
                        "hasNextPage": false
                    }
                }
            }
        })
    );
}

#[tokio::test]
async fn fetches_no_ships_at_the_end_of_the_list() {
    let query = r#"{
        rebels {
            ships(first: 3, after: "YXJyYXljb25uZWN0aW9uOjQ=") {
                items { name }
                pageInfo { startCursor, endCursor, hasNextPage }
                totalCount
            }
        }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "ships": {
                    "items": [],
                    "pageInfo": {
                        "startCursor": Value::Null,
                        "endCursor": Value::Null,
                        "hasNextPage": false
                    },
                    "totalCount": 5
                }
            }
        })
    );
}

#[tokio::test]
async fn fetches_the_last_ships_of_the_empire() {
    let query = r#"{
        empire {
            ships(last: 2) {
                items { name }
                pageInfo { hasPreviousPage, hasNextPage }
            }
        }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "empire": {
                "ships": {
                    "items": [
                        { "name": "TIE Interceptor" },
                        { "name": "Executor" }
                    ],
                    "pageInfo": {
                        "hasPreviousPage": true,
                        "hasNextPage": false
                    }
                }
            }
        })
    );
}

#[tokio::test]
async fn garbage_cursors_are_ignored() {
    let query = r#"{
        empire {
            ships(after: "garbage", before: "more garbage") {
                items { name }
            }
        }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "empire": {
                "ships": {
                    "items": [
                        { "name": "TIE Fighter" },
                        { "name": "TIE Interceptor" },
                        { "name": "Executor" }
                    ]
                }
            }
        })
    );
}

#[rstest]
#[case::rebels("RmFjdGlvbjox", "Faction", "Alliance to Restore the Republic")]
#[case::empire("RmFjdGlvbjoy", "Faction", "Galactic Empire")]
#[case::x_wing("U2hpcDox", "Ship", "X-Wing")]
#[case::executor("U2hpcDo4", "Ship", "Executor")]
#[tokio::test]
async fn refetches_nodes_by_global_id(
    #[case] id: &str,
    #[case] type_name: &str,
    #[case] name: &str,
) {
    let query = format!(
        r#"{{
            node(id: "{id}") {{
                id
                __typename
                ... on Faction {{ name }}
                ... on Ship {{ name }}
            }}
        }}"#,
        id = id
    );

    let response = execute(&schema(), &query).await;

    assert_eq!(
        response.data,
        value!({
            "node": {
                "id": id,
                "__typename": type_name,
                "name": name
            }
        })
    );
}

#[tokio::test]
async fn fetches_ids_of_factions() {
    let query = r#"{
        rebels { id, name }
        empire { id, name }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "id": "RmFjdGlvbjox",
                "name": "Alliance to Restore the Republic"
            },
            "empire": {
                "id": "RmFjdGlvbjoy",
                "name": "Galactic Empire"
            }
        })
    );
}

#[rstest]
#[case::not_base64("not a global id")]
#[case::missing_separator("U2hpcA==")]
#[case::unknown_type("VXNlcjox")]
#[case::unknown_ship("U2hpcDo5OQ==")]
#[tokio::test]
async fn returns_null_for_bad_ids(#[case] id: &str) {
    let query = format!(r#"{{ node(id: "{}") {{ id }} }}"#, id);

    let response = execute(&schema(), &query).await;

    assert_eq!(response.data, value!({ "node": Value::Null }));
}

#[tokio::test]
async fn fetches_ships_by_plural_ids() {
    let query = r#"{
        ships(ids: ["8", "99", "1"]) { name }
    }"#;

    let response = execute(&schema(), query).await;

    assert_eq!(
        response.data,
        value!({
            "ships": [
                { "name": "Executor" },
                Value::Null,
                { "name": "X-Wing" }
            ]
        })
    );
}

#[tokio::test]
async fn introduces_a_ship() {
    let schema = schema();

    let mutation = r#"mutation {
        introduceShip(input: { shipName: "B-Wing", factionId: "1" }) {
            ship { id, name }
            faction { name }
        }
    }"#;

    let response = execute(&schema, mutation).await;

    assert_eq!(
        response.data,
        value!({
            "introduceShip": {
                "ship": {
                    "id": "U2hpcDo5",
                    "name": "B-Wing"
                },
                "faction": {
                    "name": "Alliance to Restore the Republic"
                }
            }
        })
    );

    let query = r#"{
        rebels {
            ships(last: 1) {
                items { name }
                totalCount
            }
        }
    }"#;

    let response = execute(&schema, query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "ships": {
                    "items": [{ "name": "B-Wing" }],
                    "totalCount": 6
                }
            }
        })
    );
}

#[rstest]
#[case::negative_first("first: -1", "Argument 'first' must be a non-negative integer, got -1")]
#[case::first_too_large(
    "first: 3",
    "Argument 'first' of 3 exceeds the maximum page size of 2"
)]
#[case::last_too_large(
    "last: 4",
    "Argument 'last' of 4 exceeds the maximum page size of 2"
)]
#[tokio::test]
async fn rejects_invalid_limits(#[case] args: &str, #[case] expected_error: &str) {
    let schema = build_schema(
        Arc::new(MemoryStarWarsRepository::new()),
        Configuration {
            max_page_size: Some(2),
            ..Configuration::default()
        },
    );

    let query = format!(r#"{{ rebels {{ ships({}) {{ totalCount }} }} }}"#, args);
    let response = schema.execute(query.as_str()).await;

    let errors: Vec<String> = response
        .errors
        .iter()
        .map(|err| err.message.clone())
        .collect();
    assert_eq!(errors, vec![expected_error.to_string()]);
}

#[tokio::test]
async fn applies_default_page_size() {
    let schema = build_schema(
        Arc::new(MemoryStarWarsRepository::new()),
        Configuration {
            default_page_size: Some(2),
            ..Configuration::default()
        },
    );

    let query = r#"{
        rebels {
            ships {
                items { name }
                pageInfo { hasNextPage }
            }
        }
    }"#;

    let response = execute(&schema, query).await;

    assert_eq!(
        response.data,
        value!({
            "rebels": {
                "ships": {
                    "items": [
                        { "name": "X-Wing" },
                        { "name": "Y-Wing" }
                    ],
                    "pageInfo": {
                        "hasNextPage": true
                    }
                }
            }
        })
    );
}

#[test]
fn sdl_exposes_ship_list() {
    let sdl = schema().sdl();

    assert!(sdl.contains("type ShipList {"));
    assert!(sdl.contains("items: [Ship!]!"));
    assert!(sdl.contains("pageInfo: PageInfo!"));
    assert!(sdl.contains("totalCount: Int!"));
    assert!(sdl.contains("interface Node {"));
    assert!(sdl.contains("type Ship implements Node {"));
    assert!(sdl.contains("type Faction implements Node {"));
}

#[test]
fn nodes_are_debug_formatted() {
    let node = Node::Ship(Ship {
        id: "1".to_owned(),
        name: "X-Wing".to_owned(),
    });

    assert_eq!(
        format!("{:?}", node),
        r#"Ship(Ship { id: "1", name: "X-Wing" })"#
    );
}
