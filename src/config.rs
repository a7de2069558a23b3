// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::Path;

use anyhow::Result;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables overriding configuration values, for example
/// `PAGINATION_MAX_PAGE_SIZE=100`.
const ENV_PREFIX: &str = "PAGINATION_";

/// Page size policy of the GraphQL list fields.
///
/// The windowing functions never read this configuration, it is only applied when pagination
/// arguments are built from GraphQL field arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Number of items returned when a list field was queried without `first` and `last`
    /// arguments.
    ///
    /// Defaults to `None`, returning the whole list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<usize>,

    /// Largest `first` or `last` value a client is allowed to request.
    ///
    /// Defaults to `None`, meaning there is no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_page_size: Option<usize>,
}

impl Configuration {
    /// Loads the configuration from the defaults, an optional TOML file and environment
    /// variables, in this order of precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Configuration::default()));

        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }

        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;

        Ok(config)
    }
}
