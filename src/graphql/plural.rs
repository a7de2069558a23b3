// SPDX-License-Identifier: AGPL-3.0-or-later

use std::future::Future;

use futures::future::join_all;

/// Resolves a plural identifying root field, for example `usernames(names: [String!]!)`.
///
/// Every input is resolved with the single input resolver, the results keep the order of the
/// inputs.
pub async fn resolve_plural<I, O, F, Fut>(inputs: Vec<I>, resolve_single_input: F) -> Vec<O>
where
    F: Fn(I) -> Fut,
    Fut: Future<Output = O>,
{
    join_all(inputs.into_iter().map(resolve_single_input)).await
}
